#[macro_use]
extern crate log;
extern crate prefix_trie;
extern crate simplelog;

use prefix_trie::command;
use prefix_trie::trie::Trie;
use simplelog::{Config, SimpleLogger};
use std::io;
use std::process;

fn run_demo() {
    let mut trie = Trie::new();
    trie.insert("apple");
    assert!(trie.search("apple"));
    assert!(!trie.search("app"));
    assert!(trie.starts_with("app"));

    trie.insert("app");
    assert!(trie.search("app"));

    trie.delete_logically("apple");
    assert!(!trie.search("apple"));

    trie.delete_physically("app");
    assert!(!trie.search("app"));

    info!("demo sequence passed");
}

fn main() {
    if let Err(err) = SimpleLogger::init(command::log_level_from_env(), Config::default()) {
        eprintln!("failed to initialize logger: {}", err);
    }

    run_demo();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut trie = Trie::new();
    if let Err(err) = command::run(stdin.lock(), stdout.lock(), &mut trie) {
        error!("{}", err);
        process::exit(1);
    }
}
