use std::{error::Error, fs};

use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
    display::{DisplaySurface, ScreenBuffer},
    engine::Calculator,
};

pub mod display;
pub mod engine;
pub mod keys;
pub mod number;
pub mod ops;

fn render<D: DisplaySurface>(calc: &Calculator<D>) {
    println!(" input: {}", calc.display().input_text());
    println!("output: {}", calc.display().output_text());
}

fn repl() -> Result<(), Box<dyn Error>> {
    let mut calc = Calculator::new(ScreenBuffer::new());
    let mut editor = DefaultEditor::new()?;
    println!("keys: 0-9 . + - * / =  (c clears, empty line evaluates)");
    loop {
        let readline = editor.readline(">> ");
        match readline {
            Ok(line) => {
                keys::press_line(&mut calc, &line);
                render(&calc);
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

fn file(path: &str) -> Result<(), Box<dyn Error>> {
    let mut calc = Calculator::new(ScreenBuffer::new());
    for line in fs::read_to_string(path)?.lines() {
        keys::press_line(&mut calc, line);
    }
    render(&calc);

    Ok(())
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long)]
    path: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if let Some(path) = args.path {
        file(&path)
    } else {
        repl()
    }
}
