use std::collections::VecDeque;
use std::io::Read;
use std::str::FromStr;

type Worry = u64;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Operation {
    Add(Worry),
    Mul(Worry),
    Square,
}

impl Operation {
    fn apply(&self, worry: Worry) -> Worry {
        match *self {
            Operation::Add(v) => worry + v,
            Operation::Mul(v) => worry * v,
            Operation::Square => worry * worry,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
struct Monkey {
    items: VecDeque<Worry>,
    op: Operation,
    divisor: Worry,
    on_true: usize,
    on_false: usize,
    inspections: u64,
}

fn field<'a>(line: Option<&'a str>, prefix: &str) -> Result<&'a str, String> {
    let line = line.ok_or_else(|| format!("missing {prefix:?} line"))?.trim();
    line.strip_prefix(prefix)
        .ok_or_else(|| format!("expected {prefix:?}, got {line:?}"))
}

impl FromStr for Monkey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        field(lines.next(), "Monkey ")?;

        let items = field(lines.next(), "Starting items: ")?
            .split(", ")
            .map(|v| v.parse().map_err(|e| format!("bad item {v:?}: {e}")))
            .collect::<Result<_, _>>()?;

        let op_str = field(lines.next(), "Operation: new = old ")?;
        let op = match op_str.split_whitespace().collect::<Vec<&str>>()[..] {
            ["*", "old"] => Operation::Square,
            ["*", v] => Operation::Mul(v.parse().map_err(|e| format!("bad operand {v:?}: {e}"))?),
            ["+", v] => Operation::Add(v.parse().map_err(|e| format!("bad operand {v:?}: {e}"))?),
            _ => return Err(format!("unexpected operation: {op_str:?}")),
        };

        let divisor = field(lines.next(), "Test: divisible by ")?
            .parse()
            .map_err(|e| format!("bad divisor: {e}"))?;
        let on_true = field(lines.next(), "If true: throw to monkey ")?
            .parse()
            .map_err(|e| format!("bad target monkey: {e}"))?;
        let on_false = field(lines.next(), "If false: throw to monkey ")?
            .parse()
            .map_err(|e| format!("bad target monkey: {e}"))?;

        Ok(Monkey { items, op, divisor, on_true, on_false, inspections: 0 })
    }
}

fn read_monkeys(r: impl Read) -> Result<Vec<Monkey>, String> {
    let input = std::io::read_to_string(r).map_err(|e| e.to_string())?;
    input.split("\n\n").map(|par| par.trim().parse()).collect()
}

fn play_rounds(monkeys: &mut [Monkey], rounds: u32, calming: bool) {
    // Worry values only ever feed divisibility tests, so arithmetic can stay
    // within the product of all divisors.
    let modulus: Worry = monkeys.iter().map(|m| m.divisor).product();
    for _ in 0..rounds {
        for i in 0..monkeys.len() {
            while let Some(item) = monkeys[i].items.pop_front() {
                monkeys[i].inspections += 1;
                let mut worry = monkeys[i].op.apply(item);
                if calming {
                    worry /= 3;
                } else {
                    worry %= modulus;
                }
                let target = if worry % monkeys[i].divisor == 0 {
                    monkeys[i].on_true
                } else {
                    monkeys[i].on_false
                };
                monkeys[target].items.push_back(worry);
            }
        }
    }
}

fn monkey_business(monkeys: &[Monkey]) -> u64 {
    let mut counts: Vec<u64> = monkeys.iter().map(|m| m.inspections).collect();
    counts.sort_unstable();
    counts.iter().rev().take(2).product()
}

fn part1(r: impl Read) -> Result<u64, String> {
    let mut monkeys = read_monkeys(r)?;
    play_rounds(&mut monkeys, 20, true);
    Ok(monkey_business(&monkeys))
}

fn part2(r: impl Read) -> Result<u64, String> {
    let mut monkeys = read_monkeys(r)?;
    play_rounds(&mut monkeys, 10_000, false);
    Ok(monkey_business(&monkeys))
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
