use std::error::Error;
use std::io::BufRead;

use once_cell::unsync::Lazy;
use regex_lite::Regex;

type Amount = u16;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Blueprint {
    ore_bot_ore: Amount,
    clay_bot_ore: Amount,
    obsidian_bot_ore: Amount,
    obsidian_bot_clay: Amount,
    geode_bot_ore: Amount,
    geode_bot_obsidian: Amount,
}

impl Blueprint {
    // No point owning more bots of a kind than the largest per-minute demand
    // for its resource.
    fn max_ore_cost(&self) -> Amount {
        self.ore_bot_ore
            .max(self.clay_bot_ore)
            .max(self.obsidian_bot_ore)
            .max(self.geode_bot_ore)
    }
}

#[derive(Clone, Copy, Debug)]
struct State {
    minutes_left: u8,
    ore: Amount,
    clay: Amount,
    obsidian: Amount,
    geode: Amount,
    ore_bots: Amount,
    clay_bots: Amount,
    obsidian_bots: Amount,
    geode_bots: Amount,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Build {
    OreBot,
    ClayBot,
    ObsidianBot,
    GeodeBot,
    Nothing,
}

impl State {
    fn start(minutes: u8) -> Self {
        State {
            minutes_left: minutes,
            ore: 0,
            clay: 0,
            obsidian: 0,
            geode: 0,
            ore_bots: 1,
            clay_bots: 0,
            obsidian_bots: 0,
            geode_bots: 0,
        }
    }

    fn collect(&mut self) {
        self.ore += self.ore_bots;
        self.clay += self.clay_bots;
        self.obsidian += self.obsidian_bots;
        self.geode += self.geode_bots;
        self.minutes_left -= 1;
    }

    /// Spend one minute on the given build (or on nothing). Existing bots
    /// collect during the minute; a new bot joins afterwards. None when the
    /// resources aren't there or the action is pointless.
    fn apply(&self, build: Build, bp: &Blueprint) -> Option<State> {
        let mut next = *self;
        match build {
            Build::OreBot => {
                if self.ore < bp.ore_bot_ore || self.ore_bots >= bp.max_ore_cost() {
                    return None;
                }
                next.ore -= bp.ore_bot_ore;
                next.collect();
                next.ore_bots += 1;
            },
            Build::ClayBot => {
                if self.ore < bp.clay_bot_ore || self.clay_bots >= bp.obsidian_bot_clay {
                    return None;
                }
                next.ore -= bp.clay_bot_ore;
                next.collect();
                next.clay_bots += 1;
            },
            Build::ObsidianBot => {
                if self.ore < bp.obsidian_bot_ore
                    || self.clay < bp.obsidian_bot_clay
                    || self.obsidian_bots >= bp.geode_bot_obsidian
                {
                    return None;
                }
                next.ore -= bp.obsidian_bot_ore;
                next.clay -= bp.obsidian_bot_clay;
                next.collect();
                next.obsidian_bots += 1;
            },
            Build::GeodeBot => {
                if self.ore < bp.geode_bot_ore || self.obsidian < bp.geode_bot_obsidian {
                    return None;
                }
                next.ore -= bp.geode_bot_ore;
                next.obsidian -= bp.geode_bot_obsidian;
                next.collect();
                next.geode_bots += 1;
            },
            Build::Nothing => {
                // Always build a geode bot when possible instead of idling.
                if self.ore >= bp.geode_bot_ore && self.obsidian >= bp.geode_bot_obsidian {
                    return None;
                }
                next.collect();
            },
        }
        Some(next)
    }

    // Optimistic: pretend a geode bot gets built every remaining minute.
    fn geode_upper_bound(&self) -> Amount {
        let t = self.minutes_left as Amount;
        self.geode + self.geode_bots * t + t * (t.saturating_sub(1)) / 2
    }
}

fn max_geodes(bp: &Blueprint, minutes: u8) -> Amount {
    fn search(state: State, bp: &Blueprint, best: &mut Amount) {
        if state.minutes_left == 0 {
            *best = (*best).max(state.geode);
            return;
        }
        if state.geode_upper_bound() <= *best {
            return;
        }
        for build in [
            Build::GeodeBot,
            Build::ObsidianBot,
            Build::ClayBot,
            Build::OreBot,
            Build::Nothing,
        ] {
            if let Some(next) = state.apply(build, bp) {
                search(next, bp, best);
            }
        }
    }
    let mut best = 0;
    search(State::start(minutes), bp, &mut best);
    best
}

fn read_blueprints(r: impl BufRead) -> Result<Vec<Blueprint>, Box<dyn Error>> {
    // eg: Blueprint 1: Each ore robot costs 4 ore. Each clay robot costs 2 ore. ...
    let line_re = Lazy::new(|| {
        Regex::new(concat!(
            r#"Blueprint \d+: Each ore robot costs (\d+) ore. "#,
            r#"Each clay robot costs (\d+) ore. "#,
            r#"Each obsidian robot costs (\d+) ore and (\d+) clay. "#,
            r#"Each geode robot costs (\d+) ore and (\d+) obsidian."#,
        )).unwrap()
    });
    let mut blueprints = Vec::new();
    for line in r.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(caps) = line_re.captures(&line) else {
            return Err(format!("unexpected blueprint line: {line}").into());
        };
        blueprints.push(Blueprint {
            ore_bot_ore: caps[1].parse()?,
            clay_bot_ore: caps[2].parse()?,
            obsidian_bot_ore: caps[3].parse()?,
            obsidian_bot_clay: caps[4].parse()?,
            geode_bot_ore: caps[5].parse()?,
            geode_bot_obsidian: caps[6].parse()?,
        });
    }
    Ok(blueprints)
}

fn part1(r: impl BufRead) -> Result<u32, Box<dyn Error>> {
    let blueprints = read_blueprints(r)?;
    Ok(blueprints
        .iter()
        .enumerate()
        .map(|(i, bp)| (i as u32 + 1) * max_geodes(bp, 24) as u32)
        .sum())
}

fn part2(r: impl BufRead) -> Result<u32, Box<dyn Error>> {
    let blueprints = read_blueprints(r)?;
    Ok(blueprints
        .iter()
        .take(3)
        .map(|bp| max_geodes(bp, 32) as u32)
        .product())
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
