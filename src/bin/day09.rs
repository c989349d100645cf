use std::collections::HashSet;
use std::io::BufRead;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Motion {
    dx: i32,
    dy: i32,
    steps: u32,
}

impl FromStr for Motion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dir, steps) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| format!("unexpected motion line: {s:?}"))?;
        let steps = steps.parse().map_err(|e| format!("bad step count in {s:?}: {e}"))?;
        let (dx, dy) = match dir {
            "U" => (0, 1),
            "D" => (0, -1),
            "L" => (-1, 0),
            "R" => (1, 0),
            _ => return Err(format!("unknown direction {dir:?}")),
        };
        Ok(Motion { dx, dy, steps })
    }
}

// A knot follows the one ahead of it: stay put while touching, otherwise step
// one towards it on each axis.
fn chase(head: Point, tail: Point) -> Point {
    let (dx, dy) = (head.x - tail.x, head.y - tail.y);
    if dx.abs() <= 1 && dy.abs() <= 1 {
        return tail;
    }
    Point {
        x: tail.x + dx.signum(),
        y: tail.y + dy.signum(),
    }
}

fn count_tail_positions(r: impl BufRead, knots: usize) -> Result<usize, String> {
    assert!(knots >= 2);
    let mut rope = vec![Point::default(); knots];
    let mut visited: HashSet<Point> = HashSet::new();
    visited.insert(*rope.last().unwrap());

    for line in r.lines() {
        let line = line.map_err(|e| e.to_string())?;
        if line.trim().is_empty() {
            continue;
        }
        let motion: Motion = line.parse()?;
        for _ in 0..motion.steps {
            rope[0].x += motion.dx;
            rope[0].y += motion.dy;
            for i in 1..rope.len() {
                rope[i] = chase(rope[i - 1], rope[i]);
            }
            visited.insert(*rope.last().unwrap());
        }
    }
    Ok(visited.len())
}

fn part1(r: impl BufRead) -> Result<usize, String> {
    count_tail_positions(r, 2)
}

fn part2(r: impl BufRead) -> Result<usize, String> {
    count_tail_positions(r, 10)
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
