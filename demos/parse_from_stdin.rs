use std::{env, io};
use uri_parts::Parser;

// Usage: parse_from_stdin [BASE]
//
// Each line is parsed as an absolute URI, or resolved against BASE if given.
fn main() {
    let base = env::args().nth(1);
    let parser = Parser::new();

    for line in io::stdin().lines() {
        let line = line.expect("failed to read line");
        match parser.parse(&line, base.is_none(), base.as_deref()) {
            Ok(c) => {
                println!("{c}");
                for (name, value) in c.entries() {
                    println!("  {name:<9} = {value:?}");
                }
            }
            Err(e) => println!("Error: {e}"),
        }
    }
}
