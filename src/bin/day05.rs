use std::error::Error;
use std::io::Read;

use once_cell::unsync::Lazy;
use regex_lite::Regex;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Step {
    count: usize,
    from: usize,
    to: usize,
}

// Bottom-to-top stacks of crate letters.
type Stacks = Vec<Vec<char>>;

fn parse_stacks(drawing: &str) -> Result<Stacks, Box<dyn Error>> {
    let mut rows: Vec<&str> = drawing.lines().collect();
    let Some(labels) = rows.pop() else {
        return Err("empty stack drawing".into());
    };
    let nstacks = labels.split_whitespace().count();
    if nstacks == 0 {
        return Err("no stack labels in drawing".into());
    }

    let mut stacks: Stacks = vec![Vec::new(); nstacks];
    for row in rows.iter().rev() {
        let chars: Vec<char> = row.chars().collect();
        for (i, stack) in stacks.iter_mut().enumerate() {
            // Crate letters sit at column 1, 5, 9, ...
            match chars.get(1 + 4 * i).copied() {
                Some(' ') | None => (),
                Some(c) if c.is_ascii_uppercase() => stack.push(c),
                Some(c) => return Err(format!("unexpected crate {c:?} in row {row:?}").into()),
            }
        }
    }
    Ok(stacks)
}

fn parse_steps(s: &str) -> Result<Vec<Step>, Box<dyn Error>> {
    let step_re = Lazy::new(|| {
        Regex::new(r#"move (\d+) from (\d+) to (\d+)"#).unwrap()
    });
    s.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let Some(caps) = step_re.captures(line) else {
                return Err(format!("unexpected step line: {line}").into());
            };
            Ok(Step {
                count: caps[1].parse()?,
                from: caps[2].parse::<usize>()? - 1,
                to: caps[3].parse::<usize>()? - 1,
            })
        })
        .collect()
}

fn parse_input(input: &str) -> Result<(Stacks, Vec<Step>), Box<dyn Error>> {
    let (drawing, steps) = input
        .split_once("\n\n")
        .ok_or("no blank line between drawing and steps")?;
    Ok((parse_stacks(drawing)?, parse_steps(steps)?))
}

fn run_crane(stacks: &mut Stacks, steps: &[Step], moves_in_bulk: bool) -> Result<(), Box<dyn Error>> {
    for step in steps {
        if step.from >= stacks.len() || step.to >= stacks.len() {
            return Err(format!("step {step:?} references a missing stack").into());
        }
        let src = &mut stacks[step.from];
        if src.len() < step.count {
            return Err(format!("step {step:?} moves more crates than stack holds").into());
        }
        let mut lifted: Vec<char> = src.split_off(src.len() - step.count);
        if !moves_in_bulk {
            lifted.reverse();
        }
        stacks[step.to].extend(lifted);
    }
    Ok(())
}

fn top_crates(stacks: &Stacks) -> String {
    stacks.iter().filter_map(|s| s.last()).collect()
}

fn part1(r: impl Read) -> Result<String, Box<dyn Error>> {
    let input = std::io::read_to_string(r)?;
    let (mut stacks, steps) = parse_input(&input)?;
    run_crane(&mut stacks, &steps, false)?;
    Ok(top_crates(&stacks))
}

fn part2(r: impl Read) -> Result<String, Box<dyn Error>> {
    let input = std::io::read_to_string(r)?;
    let (mut stacks, steps) = parse_input(&input)?;
    run_crane(&mut stacks, &steps, true)?;
    Ok(top_crates(&stacks))
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args[..] {
        ["part1"] => println!("{}", part1(std::io::stdin().lock())?),
        ["part2"] => println!("{}", part2(std::io::stdin().lock())?),
        _ => return Err("must specify part1|part2".into()),
    }
    Ok(())
}
