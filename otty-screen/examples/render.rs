//! Decodes a short captured session into a small screen and prints it.
//!
//! Run with `RUST_LOG=debug` to see the sequences the decoder skips.

use env_logger::Env;
use otty_screen::{Decoder, Screen, ScreenConfig, ScreenError};

const SESSION: &str = concat!(
    "\x1b[H\x1b[2J",
    "\x1b[1;32muser@host\x1b[0m:~$ ls\r\n",
    "Cargo.toml  otty-ansi  otty-fsm  otty-screen\r\n",
    "\x1b[1;32muser@host\x1b[0m:~$ top\r\n",
    "\x1b[?1049h\x1b[3;1H\x1b[7mPID  COMMAND\x1b[m\x1b[K\r\n",
    "1    init\r\n",
    "\x1b[1;1H\x1b[2K\x1b(B\x1b[5;4H?\x1b[12;1z",
);

fn main() -> Result<(), ScreenError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let screen = Screen::new(ScreenConfig {
        rows: 8,
        columns: 48,
        ..ScreenConfig::default()
    })?;

    let mut decoder = Decoder::new(screen);
    decoder.process_text(SESSION);

    let screen = decoder.into_surface();
    let (row, col) = screen.cursor();
    log::info!("decoded {} chars, cursor at {row};{col}", SESSION.len());
    print!("{}", screen.pretty());

    Ok(())
}
