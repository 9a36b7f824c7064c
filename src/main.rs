use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdin, stdout, Write};

use connect4_minimax::{board::*, search::Searcher, terminal::*, Config, DEFAULT_DEPTH, MAX_DEPTH};

fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (0..board.columns()).map(|x| (x % 10).to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    for row in 0..board.rows() {
        for column in 0..board.columns() {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match board.get(row, column) {
                        Piece::Human => Color::Red,
                        Piece::Computer => Color::Yellow,
                        Piece::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // choose the search depth
    let config = loop {
        let mut buffer = String::new();
        print!(
            "Computer search depth 1-{} (default {}): ",
            MAX_DEPTH, DEFAULT_DEPTH
        );
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;

        let input = buffer.trim();
        let depth = if input.is_empty() {
            DEFAULT_DEPTH
        } else {
            match input.parse::<usize>() {
                Ok(depth) => depth,
                Err(_) => {
                    println!("Invalid number: {}", input);
                    continue;
                }
            }
        };

        let config = Config::default().with_depth(depth);
        match config.validate() {
            Ok(()) => break config,
            Err(err) => println!("{}", err),
        }
    };

    let mut board = Board::new(&config);
    let mut searcher = Searcher::new(config);

    let mut turn = if rand::random::<bool>() {
        Piece::Human
    } else {
        Piece::Computer
    };
    match turn {
        Piece::Human => println!("Human moves first (red)\n"),
        _ => println!("Computer moves first (yellow)\n"),
    }

    // game loop
    loop {
        display(&board)?;

        match game_state(&board) {
            GameState::Playing => {}

            // end states
            GameState::HumanWin => {
                println!("Human wins!");
                break;
            }
            GameState::ComputerWin => {
                println!("Computer wins!");
                break;
            }
            GameState::Draw => {
                println!("It's a draw!");
                break;
            }
        }

        match turn {
            Piece::Human => {
                print!("Human player, choose a column (0-{}): ", board.columns() - 1);
                stdout().flush().expect("Failed to flush to stdout!");
                let mut input_str = String::new();
                stdin.read_line(&mut input_str)?;

                let column = match input_str.trim().parse::<usize>() {
                    Err(_) => {
                        println!(
                            "Invalid input. Please enter a number between 0 and {}.",
                            board.columns() - 1
                        );
                        continue;
                    }
                    Ok(column) => column,
                };

                if let Err(err) = board.play_checked(column, Piece::Human) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }
            _ => {
                println!("Computer is thinking...");
                stdout().flush().expect("Failed to flush to stdout!");

                let (column, _score) = searcher.best_move_verbose(&board);
                board.play_checked(column, Piece::Computer)?;
                println!("Computer plays column {}", column);
            }
        }
        turn = turn.opponent();
    }
    Ok(())
}
