/// Compatibility switches for behaviour that differs between historical interpreters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quirks {
    /// FX1E sets VF to 1 when I + Vx runs past 0xFFF and to 0 otherwise. When
    /// disabled VF is left untouched. I wraps around in both cases.
    pub index_overflow_sets_vf: bool,
}
