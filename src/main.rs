use std::{
    cmp::Ordering,
    fs,
    io::{self, BufRead, Write},
    path::Path,
    process,
};

use serde_derive::Deserialize;

use wordrack::{
    command::Command,
    dict::Dict,
    display,
    game::{Difficulty, Game},
};

const CONFIG_FILE: &str = "wordrack.toml";

#[derive(Deserialize)]
#[serde(default)]
struct Config {
    dict_file: String,
    difficulty: Difficulty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dict_file: "dict.txt".to_string(),
            difficulty: Difficulty::default(),
        }
    }
}

fn load_config() -> Config {
    match fs::read_to_string(CONFIG_FILE) {
        Ok(raw) => toml::from_str(&raw).unwrap_or_else(|e| {
            eprintln!("{CONFIG_FILE}: {e}; falling back to defaults");
            Config::default()
        }),
        Err(_) => Config::default(),
    }
}

fn main() {
    env_logger::init();
    let config = load_config();
    let dict = match Dict::from_file(Path::new(&config.dict_file)) {
        Ok(dict) => dict,
        Err(e) => {
            eprintln!("could not load dictionary {}: {e}", config.dict_file);
            process::exit(1);
        }
    };

    let mut game = Game::new(dict, config.difficulty);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        display::render(&game);

        // human turn: re-prompt until a move or a pass lands
        loop {
            print!("move (WORD X Y A|D, or PASS)> ");
            io::stdout().flush().ok();
            let Some(Ok(line)) = lines.next() else {
                println!();
                return;
            };
            match line.parse::<Command>() {
                Err(e) => println!("{e}"),
                Ok(Command::Pass) => {
                    game.pass();
                    println!("You pass.");
                    break;
                }
                Ok(Command::Place { word, start, dir }) => {
                    match game.human_move(&word, start, dir) {
                        Ok(score) => {
                            println!("You played {word} for {score} points.");
                            break;
                        }
                        Err(e) => println!("Illegal move: {e}"),
                    }
                }
            }
        }
        if game.is_over() {
            break;
        }

        match game.computer_move() {
            Some((mv, score)) => println!(
                "Computer plays {} at ({}, {}) {} for {} points.",
                mv.word, mv.start.col, mv.start.row, mv.dir, score
            ),
            None => println!("Computer passes."),
        }
        if game.is_over() {
            break;
        }
    }

    display::render(&game);
    let [you, computer] = game.final_scores();
    println!("Final score: you {you}, computer {computer}.");
    println!(
        "{}",
        match you.cmp(&computer) {
            Ordering::Greater => "You win!",
            Ordering::Less => "The computer wins.",
            Ordering::Equal => "A tie.",
        }
    );
}
