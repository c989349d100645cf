use std::io::BufRead;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Instr {
    Noop,
    Addx(i32),
}

impl FromStr for Instr {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_whitespace().collect::<Vec<&str>>()[..] {
            ["noop"] => Ok(Instr::Noop),
            ["addx", v] => v
                .parse()
                .map(Instr::Addx)
                .map_err(|e| format!("bad addx operand in {s:?}: {e}")),
            _ => Err(format!("unexpected instruction: {s:?}")),
        }
    }
}

/// Value of register X during each cycle, starting with cycle 1.
fn x_per_cycle(r: impl BufRead) -> Result<Vec<i32>, String> {
    let mut xs: Vec<i32> = Vec::new();
    let mut x = 1;
    for line in r.lines() {
        let line = line.map_err(|e| e.to_string())?;
        if line.trim().is_empty() {
            continue;
        }
        match line.trim().parse()? {
            Instr::Noop => xs.push(x),
            Instr::Addx(v) => {
                xs.push(x);
                xs.push(x);
                x += v;
            },
        }
    }
    Ok(xs)
}

fn part1(r: impl BufRead) -> Result<i32, String> {
    let xs = x_per_cycle(r)?;
    // Strength samples at cycle 20 and every 40 cycles after.
    Ok(xs
        .iter()
        .enumerate()
        .map(|(i, &x)| (i as i32 + 1, x))
        .filter(|(cycle, _)| (cycle - 20) % 40 == 0)
        .map(|(cycle, x)| cycle * x)
        .sum())
}

fn part2(r: impl BufRead) -> Result<String, String> {
    let xs = x_per_cycle(r)?;
    let mut screen = String::new();
    for (i, &x) in xs.iter().take(240).enumerate() {
        let column = (i % 40) as i32;
        if column == 0 && i > 0 {
            screen.push('\n');
        }
        // The sprite is three pixels wide, centered on X.
        screen.push(if (column - x).abs() <= 1 { '#' } else { '.' });
    }
    Ok(screen)
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

#[cfg(test)]
mod test {
    use super::*;

    const SMALL_EXAMPLE: &str = "\
noop
addx 3
addx -5";

    const EXAMPLE: &str = "\
addx 15
addx -11
addx 6
addx -3
addx 5
addx -1
addx -8
addx 13
addx 4
noop
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx -35
addx 1
addx 24
addx -19
addx 1
addx 16
addx -11
noop
noop
addx 21
addx -15
noop
noop
addx -3
addx 9
addx 1
addx -3
addx 8
addx 1
addx 5
noop
noop
noop
noop
noop
addx -36
noop
addx 1
addx 7
noop
noop
noop
addx 2
addx 6
noop
noop
noop
noop
noop
addx 1
noop
noop
addx 7
addx 1
noop
addx -13
addx 13
addx 7
noop
addx 1
addx -33
noop
noop
noop
addx 2
noop
noop
noop
addx 8
noop
addx -1
addx 2
addx 1
noop
addx 17
addx -9
addx 1
addx 1
addx -3
addx 11
noop
noop
addx 1
noop
addx 1
noop
noop
addx -13
addx -19
addx 1
addx 3
addx 26
addx -30
addx 12
addx -1
addx 3
addx 1
noop
noop
noop
addx -9
addx 18
addx 1
addx 2
noop
noop
addx 9
noop
noop
noop
addx -1
addx 2
addx -37
addx 1
addx 3
noop
addx 15
addx -21
addx 22
addx -6
addx 1
noop
addx 2
addx 1
noop
addx -10
noop
noop
addx 20
addx 1
addx 2
addx 2
addx -6
addx -11
noop
noop
noop";

    #[test]
    fn test_parse() {
        assert_eq!("noop".parse::<Instr>(), Ok(Instr::Noop));
        assert_eq!("addx -5".parse::<Instr>(), Ok(Instr::Addx(-5)));
        assert!("addy 5".parse::<Instr>().is_err());
    }

    #[test]
    fn test_small_program() {
        let xs = x_per_cycle(SMALL_EXAMPLE.as_bytes()).unwrap();
        assert_eq!(xs, vec![1, 1, 1, 4, 4]);
    }

    #[test]
    fn test_part1() {
        assert_eq!(part1(EXAMPLE.as_bytes()), Ok(13140));
    }

    #[test]
    fn test_part2() {
        let want = "\
##..##..##..##..##..##..##..##..##..##..
###...###...###...###...###...###...###.
####....####....####....####....####....
#####.....#####.....#####.....#####.....
######......######......######......####
#######.......#######.......#######.....";
        assert_eq!(part2(EXAMPLE.as_bytes()).unwrap(), want);
    }
}
