/// Defines the static instruction table `INSTRUCTION_TABLE`. Each line reads
/// `expected / mask => mnemonic, handler;` and matches every word for which
/// `word & mask == expected`. Entries are tested in the order given, so entries
/// with more specific masks have to come first.
macro_rules! define_instruction_table {
    ($($expected:literal / $mask:literal => $mnemonic:literal, $handler:path;)*) => {
        pub(super) static INSTRUCTION_TABLE: &[InstructionPattern] = &[
            $(
                InstructionPattern {
                    mask: $mask,
                    expected: $expected,
                    mnemonic: $mnemonic,
                    handler: $handler,
                },
            )*
        ];
    };
}
