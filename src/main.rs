use std::env;

use lumbung::{
    executor::{
        ExecuteResult, execute_statement,
        statement::{PrepareError, prepare_statement},
    },
    storage::{node, table::Table},
    types::row::ROW_SIZE,
};
use rustyline::{DefaultEditor, Result, error::ReadlineError};

enum MetaCommandResult {
    Success,
    Exit,
    Unrecognized,
}

fn print_constants() {
    println!("ROW_SIZE: {}", ROW_SIZE);
    println!("COMMON_NODE_HEADER_SIZE: {}", node::COMMON_NODE_HEADER_SIZE);
    println!("LEAF_NODE_HEADER_SIZE: {}", node::LEAF_NODE_HEADER_SIZE);
    println!("LEAF_NODE_CELL_SIZE: {}", node::LEAF_NODE_CELL_SIZE);
    println!("LEAF_NODE_SPACE_FOR_CELLS: {}", node::LEAF_NODE_SPACE_FOR_CELLS);
    println!("LEAF_NODE_MAX_CELLS: {}", node::LEAF_NODE_MAX_CELLS);
}

fn do_meta_command(command: &str, table: &mut Table) -> MetaCommandResult {
    match command {
        ".exit" => MetaCommandResult::Exit,
        ".btree" => {
            println!("Tree:");
            let root_page_num = table.root_page_num();
            match table.pager().get_page(root_page_num) {
                Ok(page) => print!("{}", node::format_leaf_node(page)),
                Err(err) => println!("Error: {}", err),
            }
            MetaCommandResult::Success
        }
        ".constants" => {
            println!("Constants:");
            print_constants();
            MetaCommandResult::Success
        }
        _ => MetaCommandResult::Unrecognized,
    }
}

fn process_statement(input: &str, table: &mut Table) {
    let statement = match prepare_statement(input) {
        Ok(statement) => statement,
        Err(PrepareError::NegativeId) => {
            println!("ID must be positive.");
            return;
        }
        Err(PrepareError::StringTooLong) => {
            println!("String is too long.");
            return;
        }
        Err(PrepareError::Syntax) => {
            println!("Syntax error. Could not parse statement.");
            return;
        }
        Err(PrepareError::Unrecognized(start)) => {
            println!("Unrecognized keyword at start of '{}'.", start);
            return;
        }
    };

    match execute_statement(&statement, table) {
        Ok(ExecuteResult::Success(rows)) => {
            for row in rows {
                println!("{}", row);
            }
            println!("Executed.");
        }
        Ok(ExecuteResult::DuplicateKey) => println!("Error: Duplicate key."),
        Ok(ExecuteResult::TableFull) => println!("Error: Table full."),
        Err(err) => {
            eprintln!("Fatal error: {}", err);
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let filename = env::args().nth(1).unwrap_or_else(|| {
        println!("[warning] no database filename supplied, using \"lumbung.db\".");
        "lumbung.db".to_string()
    });

    let mut table = match Table::open(&filename) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("Unable to open database '{}': {}", filename, err);
            std::process::exit(1);
        }
    };

    let mut rl = DefaultEditor::new()?;
    let _ = rl.load_history("history.txt");

    loop {
        match rl.readline("lumbung> ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                rl.add_history_entry(input)?;

                if input.starts_with('.') {
                    match do_meta_command(input, &mut table) {
                        MetaCommandResult::Success => {}
                        MetaCommandResult::Exit => break,
                        MetaCommandResult::Unrecognized => {
                            println!("Unrecognized command '{}'", input);
                        }
                    }
                    continue;
                }

                process_statement(input, &mut table);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    let _ = rl.save_history("history.txt");

    if let Err(err) = table.close() {
        eprintln!("Error closing db file: {}", err);
        std::process::exit(1);
    }
    Ok(())
}
