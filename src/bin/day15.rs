use std::collections::HashSet;
use std::error::Error;
use std::io::BufRead;

use once_cell::unsync::Lazy;
use regex_lite::Regex;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Sensor {
    x: i64,
    y: i64,
    beacon_x: i64,
    beacon_y: i64,
}

impl Sensor {
    fn radius(&self) -> i64 {
        (self.x - self.beacon_x).abs() + (self.y - self.beacon_y).abs()
    }

    // Inclusive x-interval this sensor covers on the given row, if any.
    fn row_coverage(&self, row: i64) -> Option<(i64, i64)> {
        let spread = self.radius() - (self.y - row).abs();
        if spread < 0 {
            return None;
        }
        Some((self.x - spread, self.x + spread))
    }
}

fn read_sensors(r: impl BufRead) -> Result<Vec<Sensor>, Box<dyn Error>> {
    let line_re = Lazy::new(|| {
        Regex::new(r#"Sensor at x=(-?\d+), y=(-?\d+): closest beacon is at x=(-?\d+), y=(-?\d+)"#).unwrap()
    });
    let mut sensors = Vec::new();
    for line in r.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(caps) = line_re.captures(&line) else {
            return Err(format!("unexpected sensor line: {line}").into());
        };
        sensors.push(Sensor {
            x: caps[1].parse()?,
            y: caps[2].parse()?,
            beacon_x: caps[3].parse()?,
            beacon_y: caps[4].parse()?,
        });
    }
    Ok(sensors)
}

/// Merge possibly-overlapping inclusive intervals into disjoint ones, sorted.
fn merge_intervals(mut intervals: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
    intervals.sort_unstable();
    let mut merged: Vec<(i64, i64)> = Vec::new();
    for (lo, hi) in intervals {
        match merged.last_mut() {
            Some((_, prev_hi)) if lo <= *prev_hi + 1 => *prev_hi = (*prev_hi).max(hi),
            _ => merged.push((lo, hi)),
        }
    }
    merged
}

fn row_intervals(sensors: &[Sensor], row: i64) -> Vec<(i64, i64)> {
    merge_intervals(sensors.iter().filter_map(|s| s.row_coverage(row)).collect())
}

fn count_excluded(sensors: &[Sensor], row: i64) -> i64 {
    let covered: i64 = row_intervals(sensors, row).iter().map(|(lo, hi)| hi - lo + 1).sum();
    let beacons_on_row: HashSet<i64> = sensors
        .iter()
        .filter(|s| s.beacon_y == row)
        .map(|s| s.beacon_x)
        .collect();
    covered - beacons_on_row.len() as i64
}

fn tuning_frequency(sensors: &[Sensor], max_coord: i64) -> Option<i64> {
    for row in 0..=max_coord {
        let intervals = row_intervals(sensors, row);
        let mut x = 0;
        for (lo, hi) in intervals {
            if lo > x {
                break;
            }
            x = x.max(hi + 1);
        }
        if x <= max_coord {
            return Some(x * 4_000_000 + row);
        }
    }
    None
}

fn part1(r: impl BufRead, row: i64) -> Result<i64, Box<dyn Error>> {
    let sensors = read_sensors(r)?;
    Ok(count_excluded(&sensors, row))
}

fn part2(r: impl BufRead, max_coord: i64) -> Result<i64, Box<dyn Error>> {
    let sensors = read_sensors(r)?;
    tuning_frequency(&sensors, max_coord).ok_or_else(|| "no uncovered position".into())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args[..] {
        ["part1"] => println!("{}", part1(std::io::stdin().lock(), 2_000_000)?),
        ["part2"] => println!("{}", part2(std::io::stdin().lock(), 4_000_000)?),
        _ => return Err("must specify part1|part2".into()),
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    const EXAMPLE: &str = "\
Sensor at x=2, y=18: closest beacon is at x=-2, y=15
Sensor at x=9, y=16: closest beacon is at x=10, y=16
Sensor at x=13, y=2: closest beacon is at x=15, y=3
Sensor at x=12, y=14: closest beacon is at x=10, y=16
Sensor at x=10, y=20: closest beacon is at x=10, y=16
Sensor at x=14, y=17: closest beacon is at x=10, y=16
Sensor at x=8, y=7: closest beacon is at x=2, y=10
Sensor at x=2, y=0: closest beacon is at x=2, y=10
Sensor at x=0, y=11: closest beacon is at x=2, y=10
Sensor at x=20, y=14: closest beacon is at x=25, y=17
Sensor at x=17, y=20: closest beacon is at x=21, y=22
Sensor at x=16, y=7: closest beacon is at x=15, y=3
Sensor at x=14, y=3: closest beacon is at x=15, y=3
Sensor at x=20, y=1: closest beacon is at x=15, y=3";

    #[test]
    fn test_parse() {
        let sensors = read_sensors(EXAMPLE.as_bytes()).unwrap();
        assert_eq!(sensors.len(), 14);
        assert_eq!(sensors[0], Sensor { x: 2, y: 18, beacon_x: -2, beacon_y: 15 });
        assert!(read_sensors("Sensor at x=1".as_bytes()).is_err());
    }

    #[test]
    fn test_row_coverage() {
        let sensor = Sensor { x: 8, y: 7, beacon_x: 2, beacon_y: 10 };
        assert_eq!(sensor.radius(), 9);
        assert_eq!(sensor.row_coverage(7), Some((-1, 17)));
        assert_eq!(sensor.row_coverage(16), Some((8, 8)));
        assert_eq!(sensor.row_coverage(17), None);
    }

    #[test]
    fn test_merge_intervals() {
        assert_eq!(
            merge_intervals(vec![(12, 12), (2, 14), (2, 2), (-2, 2), (16, 24), (14, 18)]),
            vec![(-2, 24)]
        );
        assert_eq!(merge_intervals(vec![(5, 7), (9, 10)]), vec![(5, 7), (9, 10)]);
    }

    #[test]
    fn test_part1() {
        assert_eq!(part1(EXAMPLE.as_bytes(), 10).unwrap(), 26);
    }

    #[test]
    fn test_part2() {
        assert_eq!(part2(EXAMPLE.as_bytes(), 20).unwrap(), 56000011);
    }
}
