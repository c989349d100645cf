use std::io::BufRead;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Shape {
    Rock,
    Paper,
    Scissors,
}

use Shape::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Outcome {
    Win,
    Lose,
    Draw,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Round {
    theirs: Shape,
    // Meaning depends on the part: a reply in part1, a desired outcome in part2.
    hint: char,
}

impl FromStr for Round {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let theirs = match fields.next() {
            Some("A") => Rock,
            Some("B") => Paper,
            Some("C") => Scissors,
            other => return Err(format!("bad opponent column: {other:?}")),
        };
        let hint = match fields.next() {
            Some(h @ ("X" | "Y" | "Z")) => h.chars().next().unwrap(),
            other => return Err(format!("bad second column: {other:?}")),
        };
        Ok(Round { theirs, hint })
    }
}

fn play(theirs: Shape, mine: Shape) -> Outcome {
    if theirs == mine {
        return Outcome::Draw;
    }
    match (mine, theirs) {
        (Rock, Scissors) | (Paper, Rock) | (Scissors, Paper) => Outcome::Win,
        _ => Outcome::Lose,
    }
}

fn score(theirs: Shape, mine: Shape) -> u32 {
    let shape_points = match mine {
        Rock => 1,
        Paper => 2,
        Scissors => 3,
    };
    let outcome_points = match play(theirs, mine) {
        Outcome::Win => 6,
        Outcome::Draw => 3,
        Outcome::Lose => 0,
    };
    shape_points + outcome_points
}

fn reply_as_shape(hint: char) -> Shape {
    match hint {
        'X' => Rock,
        'Y' => Paper,
        _ => Scissors,
    }
}

// Find the reply that produces the hinted outcome by trying all three.
fn reply_for_outcome(theirs: Shape, hint: char) -> Shape {
    let want = match hint {
        'X' => Outcome::Lose,
        'Y' => Outcome::Draw,
        _ => Outcome::Win,
    };
    for mine in [Rock, Paper, Scissors] {
        if play(theirs, mine) == want {
            return mine;
        }
    }
    unreachable!("every outcome is reachable against any shape");
}

fn read_rounds(r: impl BufRead) -> Result<Vec<Round>, String> {
    r.lines()
        .map(|line| line.map_err(|e| e.to_string()))
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .map(|line| line.and_then(|l| l.trim().parse()))
        .collect()
}

fn part1(r: impl BufRead) -> Result<u32, String> {
    let rounds = read_rounds(r)?;
    Ok(rounds.iter().map(|rd| score(rd.theirs, reply_as_shape(rd.hint))).sum())
}

fn part2(r: impl BufRead) -> Result<u32, String> {
    let rounds = read_rounds(r)?;
    Ok(rounds.iter().map(|rd| score(rd.theirs, reply_for_outcome(rd.theirs, rd.hint))).sum())
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args[..] {
        ["part1"] => Ok(println!("{}", part1(std::io::stdin().lock())?)),
        ["part2"] => Ok(println!("{}", part2(std::io::stdin().lock())?)),
        _ => Err("must specify part1|part2".to_string()),
    }
}
