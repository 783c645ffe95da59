use std::path::PathBuf;

use clap::Parser;
use crossbeam_channel::{bounded, Receiver, Sender};
use cursive::{event::Key, views::Dialog, CbSink, Cursive};
use log::{error, info, LevelFilter};

use chip_8_interpreter::chip::{
    chip8::{cursive_display::CursiveFrontend, cursive_display::Display, Chip8, Quirks},
    event_loop::{event_loop, Event, LoopSettings, DEFAULT_INSTRUCTIONS_PER_SECOND},
    Chip,
};

/// Runs a CHIP-8 program in the terminal.
///
/// Keys 1234/qwer/asdf/zxcv form the hexadecimal keypad, space releases all keys,
/// up and down change the speed, F5 resets the machine, ~ toggles the log console
/// and Esc quits.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the program to load.
    rom: PathBuf,

    /// Instructions executed per second.
    #[arg(long, default_value_t = DEFAULT_INSTRUCTIONS_PER_SECOND)]
    ips: u32,

    /// Let FX1E set VF when I overflows past 0xFFF.
    #[arg(long)]
    index_overflow_sets_vf: bool,

    /// Seed for CXNN, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

/// Represents the channels available to the emulation thread.
struct EmulationChannels {
    /// The channel to send the UI refresh messages to.
    gfx_sender: CbSink,

    /// The channel on which the Events are received.
    key_receiver: Receiver<Event<u8>>,

    /// A channel to report that the thread has completed shutdown.
    shutdown_sender: Sender<()>,
}

/// Runs the event loop until it quits or fails, then reports the outcome to the UI.
fn run_emulation(mut chip: Chip8, settings: LoopSettings, channels: EmulationChannels) {
    let mut frontend = CursiveFrontend::new(channels.gfx_sender.clone());
    match event_loop(&mut chip, &channels.key_receiver, &mut frontend, settings) {
        Ok(()) => info!("emulation stopped"),
        Err(e) => {
            error!("emulation halted: {}", e);
            let message = format!("The machine halted:\n{}\n\nPress Esc to quit.", e);
            let _ = channels.gfx_sender.send(Box::new(move |s: &mut Cursive| {
                s.add_layer(Dialog::text(message).title("CHIP-8"));
            }));
        }
    }
    let _ = channels.shutdown_sender.send(());
}

/// Constructs the UI and spawns the emulation thread.
fn main() {
    let args = Args::parse();

    let mut chip8 = match args.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    };
    chip8.set_quirks(Quirks {
        index_overflow_sets_vf: args.index_overflow_sets_vf,
    });

    if let Err(e) = chip8.load_program(&args.rom) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let mut siv = cursive::default();
    cursive::logger::init();
    log::set_max_level(LevelFilter::Info);
    siv.add_global_callback('~', Cursive::toggle_debug_console);

    let cb_sink = siv.cb_sink().clone();
    let (key_sender, key_receiver) = bounded::<Event<u8>>(10);
    let (shutdown_sender, shutdown_receiver) = bounded::<()>(1);

    let settings = LoopSettings {
        instructions_per_second: args.ips,
        ..LoopSettings::default()
    };
    std::thread::spawn(move || {
        run_emulation(
            chip8,
            settings,
            EmulationChannels {
                gfx_sender: cb_sink,
                key_receiver,
                shutdown_sender,
            },
        );
    });

    let sender = key_sender.clone();
    siv.add_global_callback(Key::Esc, move |s| {
        // the emulation thread may already have halted
        let _ = sender.send(Event::Quit);
        let _ = shutdown_receiver.recv();
        s.quit();
    });

    for (i, j) in &[
        ('1', 0x1),
        ('2', 0x2),
        ('3', 0x3),
        ('4', 0xC),
        ('q', 0x4),
        ('w', 0x5),
        ('e', 0x6),
        ('r', 0xD),
        ('a', 0x7),
        ('s', 0x8),
        ('d', 0x9),
        ('f', 0xE),
        ('z', 0xA),
        ('x', 0x0),
        ('c', 0xB),
        ('v', 0xF),
    ] {
        let sender = key_sender.clone();
        let key = *j as u8;
        siv.add_global_callback(*i, move |_s| {
            let _ = sender.send(Event::Key(key));
        });
    }

    for (trigger, event) in vec![
        (cursive::event::Event::Char(' '), Event::KeyRelease),
        (cursive::event::Event::Key(Key::Up), Event::SpeedUp),
        (cursive::event::Event::Key(Key::Down), Event::SlowDown),
        (cursive::event::Event::Key(Key::F5), Event::Reset),
    ] {
        let sender = key_sender.clone();
        siv.add_global_callback(trigger, move |_s| {
            let _ = sender.send(event.clone());
        });
    }

    siv.add_layer(Display::default());

    siv.run();
}
