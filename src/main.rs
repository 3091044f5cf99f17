use chatmark::parse_reply;
use std::io::{self, Read};

fn main() {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .expect("Failed to read stdin");
    let blocks = parse_reply(&input);
    let json = serde_json::to_string_pretty(&blocks).expect("Failed to serialize blocks");
    println!("{}", json);
}
