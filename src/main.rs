extern crate clap;
#[macro_use] extern crate log;
extern crate fern;
extern crate chrono;

pub mod compiler;

use clap::{Arg, ArgMatches, App};

use std::fs;
use std::path::Path;

use compiler::labels::LabelAllocator;
use compiler::lexer::Lexer;
use compiler::parser::Parser;
use compiler::symbol::SymbolTable;
use compiler::codegen::CodeGenerator;

fn main() {
    let args = process_arguments();
    initialize_logging(args.occurrences_of("verbose"));

    debug!("Arguments:\n\tVerbosity: {}\n\tPrint AST: {}\n\tOutfile: {}\n\tInfile: {}",
        match args.occurrences_of("verbose") {
            0 => log::LevelFilter::Error.to_string(),
            1 => log::LevelFilter::Warn.to_string(),
            2 => log::LevelFilter::Info.to_string(),
            3 | _ => log::LevelFilter::Debug.to_string(),
        },
        args.is_present("print-debug"),
        args.value_of("output").unwrap_or("None"),
        args.value_of("INPUT").unwrap()
    );

    let ipath = Path::new(args.value_of("INPUT").unwrap());

    // Read the whole source file up front; the lexer walks it as a
    // character stream.
    let source = match fs::read_to_string(&ipath) {
        Err(err) => {
            error!("fatal: unable to open input file `{}`: {}", ipath.display(), err);
            std::process::exit(1);
        },
        Ok(text) => text,
    };

    let program = match Parser::new(Lexer::new(&source)).run() {
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        },
        Ok(program) => program,
    };

    if args.is_present("print-debug") {
        println!("=== Parsed AST ===");
        print!("{}", program);
    }

    let mut symbols = SymbolTable::new();
    let mut labels = LabelAllocator::new();
    let asm = match CodeGenerator::new(&mut symbols, &mut labels).run(&program) {
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        },
        Ok(asm) => asm,
    };

    match args.value_of("output") {
        Some(filename) => {
            let opath = Path::new(filename);
            if let Err(err) = fs::write(&opath, &asm) {
                error!("fatal: unable to write output file `{}`: {}", opath.display(), err);
                std::process::exit(1);
            }
        },
        None => print!("{}", asm),
    }
}

fn process_arguments() -> ArgMatches<'static> {
    App::new(option_env!("CARGO_PKG_NAME").unwrap())
        .version(option_env!("CARGO_PKG_VERSION").unwrap())
        .about(option_env!("CARGO_PKG_DESCRIPTION").unwrap())
        .arg(Arg::with_name("INPUT")
            .help("Sets the input file to use")
            .required(true)
            .multiple(false)
            .index(1))
        .arg(Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .takes_value(false)
            .help("Sets the level of verbosity"))
        .arg(Arg::with_name("output")
            .short("o")
            .takes_value(true)
            .help("write assembly to an outfile instead of STDOUT"))
        .arg(Arg::with_name("print-debug")
            .short("d")
            .alias("show")
            .alias("s")
            .takes_value(false)
            .help("prints the parsed AST to STDOUT before the assembly"))
        .get_matches()
}

fn initialize_logging(verbosity: u64) {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(match verbosity {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Warn,
            2 => log::LevelFilter::Info,
            3 | _ => log::LevelFilter::Debug,
        })
        .chain(std::io::stdout())
        .apply().ok();
}
