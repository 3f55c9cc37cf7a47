extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use nga::lang::{words, Error};
use nga::mach::Runtime;
use std::sync::atomic::Ordering;

const IMAGE_FILE: &str = "ngaImage";

pub fn main() {
    let mut runtime = Runtime::default();
    let interrupted = runtime.interrupt_handle();
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = start(&mut runtime) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
    if let Err(error) = main_loop(runtime) {
        eprintln!("{}", error);
    }
}

fn start(runtime: &mut Runtime) -> Result<(), Error> {
    runtime.load_image(IMAGE_FILE)?;
    runtime.check_image()?;
    let version = runtime.version()?;
    println!("Nga (image {}.{})", version / 100, version % 100);
    println!(
        "{} MAX, TIB @ {}, Heap @ {}\n",
        runtime.memory().len(),
        runtime.config().tib,
        runtime.heap()?
    );
    Ok(())
}

fn main_loop(mut runtime: Runtime) -> std::io::Result<()> {
    let interface = Interface::new("Nga")?;
    loop {
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        for word in words(&line) {
            if word == "bye" {
                return Ok(());
            }
            if let Err(error) = runtime.evaluate(&word) {
                interface.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
                std::process::exit(1);
            }
        }
        interface.add_history_unique(line);
    }
    Ok(())
}
