use std::collections::HashMap;
use std::error::Error;
use std::io::Read;

const WIDTH: u8 = 7;

// Rock shapes as (x, y) offsets from the bottom-left of their bounding box,
// in falling order: bar, plus, corner, column, square.
const SHAPES: [&[(u8, u8)]; 5] = [
    &[(0, 0), (1, 0), (2, 0), (3, 0)],
    &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
    &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)],
    &[(0, 0), (0, 1), (0, 2), (0, 3)],
    &[(0, 0), (1, 0), (0, 1), (1, 1)],
];

/// The vertical chamber. Each row is a 7-bit occupancy mask, row 0 at the
/// floor.
#[derive(Default)]
struct Chamber {
    rows: Vec<u8>,
}

impl Chamber {
    fn height(&self) -> usize {
        self.rows.len()
    }

    fn fits(&self, shape: &[(u8, u8)], x: i32, y: i64) -> bool {
        shape.iter().all(|&(sx, sy)| {
            let px = x + sx as i32;
            let py = y + sy as i64;
            if px < 0 || px >= WIDTH as i32 || py < 0 {
                return false;
            }
            match self.rows.get(py as usize) {
                Some(row) => row & (1 << px) == 0,
                None => true,
            }
        })
    }

    fn settle(&mut self, shape: &[(u8, u8)], x: i32, y: i64) {
        for &(sx, sy) in shape {
            let py = (y + sy as i64) as usize;
            while self.rows.len() <= py {
                self.rows.push(0);
            }
            self.rows[py] |= 1 << (x + sx as i32);
        }
    }

    // The top rows, newest first; enough of a fingerprint to detect repeats.
    fn surface(&self) -> Vec<u8> {
        self.rows.iter().rev().take(30).copied().collect()
    }
}

struct Simulation {
    chamber: Chamber,
    jets: Vec<i32>,
    jet_index: usize,
    rocks_dropped: u64,
}

impl Simulation {
    fn new(pattern: &str) -> Result<Self, String> {
        let jets: Vec<i32> = pattern
            .trim()
            .chars()
            .map(|c| match c {
                '<' => Ok(-1),
                '>' => Ok(1),
                _ => Err(format!("unexpected jet character {c:?}")),
            })
            .collect::<Result<_, _>>()?;
        if jets.is_empty() {
            return Err("empty jet pattern".to_string());
        }
        Ok(Simulation {
            chamber: Chamber::default(),
            jets,
            jet_index: 0,
            rocks_dropped: 0,
        })
    }

    fn drop_rock(&mut self) {
        let shape = SHAPES[(self.rocks_dropped % SHAPES.len() as u64) as usize];
        let mut x: i32 = 2;
        let mut y: i64 = self.chamber.height() as i64 + 3;
        loop {
            let push = self.jets[self.jet_index];
            self.jet_index = (self.jet_index + 1) % self.jets.len();
            if self.chamber.fits(shape, x + push, y) {
                x += push;
            }
            if self.chamber.fits(shape, x, y - 1) {
                y -= 1;
            } else {
                self.chamber.settle(shape, x, y);
                break;
            }
        }
        self.rocks_dropped += 1;
    }

    /// Tower height after dropping `count` rocks. Repeated (shape, jet,
    /// surface) states let the middle of a long run be skipped as whole
    /// cycles.
    fn height_after(&mut self, count: u64) -> u64 {
        let mut seen: HashMap<(u64, usize, Vec<u8>), (u64, u64)> = HashMap::new();
        let mut skipped_height: u64 = 0;
        while self.rocks_dropped < count {
            self.drop_rock();
            if skipped_height > 0 {
                continue; // Already warped; just finish the tail.
            }
            let key = (
                self.rocks_dropped % SHAPES.len() as u64,
                self.jet_index,
                self.chamber.surface(),
            );
            let now = (self.rocks_dropped, self.chamber.height() as u64);
            if let Some(&(prev_rocks, prev_height)) = seen.get(&key) {
                let cycle_rocks = self.rocks_dropped - prev_rocks;
                let cycle_height = self.chamber.height() as u64 - prev_height;
                let cycles = (count - self.rocks_dropped) / cycle_rocks;
                skipped_height = cycles * cycle_height;
                self.rocks_dropped += cycles * cycle_rocks;
            } else {
                seen.insert(key, now);
            }
        }
        self.chamber.height() as u64 + skipped_height
    }

    #[cfg(test)]
    fn render(&self) -> String {
        let mut out = String::new();
        for &row in self.chamber.rows.iter().rev() {
            out.push('|');
            for x in 0..WIDTH {
                out.push(if row & (1 << x) != 0 { '#' } else { '.' });
            }
            out.push_str("|\n");
        }
        out.push_str("+-------+");
        out
    }
}

fn part1(r: impl Read) -> Result<u64, Box<dyn Error>> {
    let pattern = std::io::read_to_string(r)?;
    let mut sim = Simulation::new(&pattern)?;
    Ok(sim.height_after(2022))
}

fn part2(r: impl Read) -> Result<u64, Box<dyn Error>> {
    let pattern = std::io::read_to_string(r)?;
    let mut sim = Simulation::new(&pattern)?;
    Ok(sim.height_after(1_000_000_000_000))
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
