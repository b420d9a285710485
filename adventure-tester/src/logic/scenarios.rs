//! Scenario catalog. Each scenario runs one iteration against a fresh
//! timeline, seeded so failures can be replayed.
use adventure_game::{Command, Direction, LevelId, NavError, SessionEvent, Timeline};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::checks::{CheckFailure, check_session, check_settled, ensure, expect_eq, new_timeline};

pub type ScenarioFn = fn(&mut ChaCha8Rng) -> Result<usize, CheckFailure>;

#[derive(Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub run: ScenarioFn,
}

const CATALOG: &[Scenario] = &[
    Scenario {
        name: "smoke",
        description: "Start the quest and land on level 1",
        run: smoke,
    },
    Scenario {
        name: "full-run",
        description: "Play from the home screen to QUEST COMPLETE",
        run: full_run,
    },
    Scenario {
        name: "back-navigation",
        description: "Advance a random distance, then walk back home",
        run: back_navigation,
    },
    Scenario {
        name: "restart",
        description: "Restart from a random point mid-quest",
        run: restart,
    },
    Scenario {
        name: "boundaries",
        description: "Back at home, continue at the end and unknown level keys are refused",
        run: boundaries,
    },
    Scenario {
        name: "overlap",
        description: "Rapid clicks while transitions are still running",
        run: overlap,
    },
    Scenario {
        name: "skills",
        description: "Power-up activation, optionally interrupted by a restart",
        run: skills,
    },
    Scenario {
        name: "random-walk",
        description: "Random commands with invariant checks after every step",
        run: random_walk,
    },
];

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.name, s.description))
}

pub fn get_scenario(name: &str) -> Option<Scenario> {
    CATALOG.iter().find(|s| s.name == name).copied()
}

pub fn all_scenario_names() -> Vec<String> {
    CATALOG.iter().map(|s| s.name.to_string()).collect()
}

fn step(tl: &mut Timeline, command: Command) -> Result<(), CheckFailure> {
    log::trace!("dispatch {command:?}");
    tl.dispatch(command);
    tl.run_until_idle();
    check_settled(tl)
}

fn blocked(tl: &Timeline, err: &NavError) -> bool {
    tl.events()
        .last()
        .is_some_and(|event| *event == SessionEvent::Blocked(err.clone()))
}

fn smoke(_rng: &mut ChaCha8Rng) -> Result<usize, CheckFailure> {
    let mut tl = new_timeline()?;
    step(&mut tl, Command::Start)?;
    expect_eq("level", LevelId::Level1, tl.session().nav().current())?;
    expect_eq(
        "label",
        "LEVEL 1".to_string(),
        tl.session().nav().status_label(),
    )?;
    Ok(1)
}

fn full_run(_rng: &mut ChaCha8Rng) -> Result<usize, CheckFailure> {
    let mut tl = new_timeline()?;
    step(&mut tl, Command::Start)?;
    for _ in 0..6 {
        step(&mut tl, Command::Continue)?;
    }
    let session = tl.session();
    expect_eq("level", LevelId::Final, session.nav().current())?;
    expect_eq(
        "label",
        "QUEST COMPLETE".to_string(),
        session.nav().status_label(),
    )?;
    ensure((session.nav().progress_percent() - 100.0).abs() < f64::EPSILON, || {
        format!("final progress {}", session.nav().progress_percent())
    })?;
    ensure(session.meters().xp_percent > 0.0, || String::from("XP bar never filled"))?;
    ensure(session.meters().countdown.is_some(), || {
        String::from("graduation countdown never started")
    })?;

    tl.dispatch(Command::Continue);
    ensure(blocked(&tl, &NavError::PastFinal), || {
        String::from("continue past the final level was not refused")
    })?;
    check_settled(&tl)?;
    Ok(8)
}

fn back_navigation(rng: &mut ChaCha8Rng) -> Result<usize, CheckFailure> {
    let mut tl = new_timeline()?;
    let distance = rng.gen_range(1..=7_u8);
    for _ in 0..distance {
        step(&mut tl, Command::Continue)?;
    }
    expect_eq("level", distance, tl.session().nav().current_level())?;

    let mut steps = usize::from(distance);
    while tl.session().can_go_back() {
        let before = tl.session().nav().current_level();
        step(&mut tl, Command::Back)?;
        expect_eq("level after back", before - 1, tl.session().nav().current_level())?;
        steps += 1;
    }
    expect_eq("history", vec![0_u8], tl.session().nav().history().to_vec())?;
    Ok(steps)
}

fn restart(rng: &mut ChaCha8Rng) -> Result<usize, CheckFailure> {
    let mut tl = new_timeline()?;
    let distance = rng.gen_range(0..=7_u8);
    for _ in 0..distance {
        step(&mut tl, Command::Continue)?;
    }
    if rng.gen_bool(0.5) {
        tl.dispatch(Command::ActivateSkills);
        tl.advance_by(rng.gen_range(0..2500));
    }
    step(&mut tl, Command::Restart)?;

    let session = tl.session();
    expect_eq("level", LevelId::Home, session.nav().current())?;
    expect_eq("skills activated", false, session.nav().skills_activated())?;
    ensure(
        (0..session.skills().skills().len()).all(|i| session.skills().fill_percent(i) == 0),
        || String::from("skill bars survived the restart"),
    )?;
    Ok(usize::from(distance) + 1)
}

fn boundaries(_rng: &mut ChaCha8Rng) -> Result<usize, CheckFailure> {
    let mut tl = new_timeline()?;
    tl.dispatch(Command::Back);
    ensure(blocked(&tl, &NavError::BeforeStart), || {
        String::from("back at home was not refused")
    })?;
    check_settled(&tl)?;

    tl.dispatch(Command::GoToKey {
        key: String::from("level9"),
        direction: Direction::Forward,
    });
    ensure(
        blocked(&tl, &NavError::UnknownLevel(String::from("level9"))),
        || String::from("unknown level key was not refused"),
    )?;
    expect_eq(
        "active level",
        Some(LevelId::Home),
        tl.session().transitions().active(),
    )?;

    for _ in 0..7 {
        step(&mut tl, Command::Continue)?;
    }
    tl.dispatch(Command::Continue);
    ensure(blocked(&tl, &NavError::PastFinal), || {
        String::from("continue at the final level was not refused")
    })?;

    step(
        &mut tl,
        Command::GoToKey {
            key: String::from("level3"),
            direction: Direction::Backward,
        },
    )?;
    expect_eq("jump target", LevelId::Level3, tl.session().nav().current())?;
    step(&mut tl, Command::Back)?;
    expect_eq("level after jump", LevelId::Level2, tl.session().nav().current())?;
    Ok(12)
}

fn overlap(rng: &mut ChaCha8Rng) -> Result<usize, CheckFailure> {
    let mut tl = new_timeline()?;
    let clicks = rng.gen_range(2..12);
    for _ in 0..clicks {
        let command = match rng.gen_range(0..10) {
            0 => Command::Restart,
            1..=3 => Command::Back,
            _ => Command::Continue,
        };
        tl.dispatch(command);
        tl.advance_by(rng.gen_range(0..500));
        check_session(tl.session())?;
    }
    tl.run_until_idle();
    check_settled(&tl)?;
    Ok(clicks)
}

fn skills(rng: &mut ChaCha8Rng) -> Result<usize, CheckFailure> {
    let mut tl = new_timeline()?;
    tl.dispatch(Command::ActivateSkills);
    tl.dispatch(Command::ActivateSkills);
    let activations = tl
        .events()
        .iter()
        .filter(|event| **event == SessionEvent::SkillsActivated)
        .count();
    expect_eq("activations", 1, activations)?;

    let interrupted = rng.gen_bool(0.5);
    if interrupted {
        tl.advance_by(rng.gen_range(0..2000));
        tl.dispatch(Command::Restart);
    }
    tl.run_until_idle();
    check_settled(&tl)?;

    let board = tl.session().skills();
    let count = board.skills().len();
    if interrupted {
        ensure((0..count).all(|i| board.fill_percent(i) == 0), || {
            String::from("bars refilled after restart")
        })?;
    } else {
        ensure(board.all_filled(), || String::from("not every bar filled"))?;
        ensure((0..count).all(|i| !board.bar(i).glowing), || {
            String::from("a bar is still glowing")
        })?;
    }
    Ok(count)
}

fn random_walk(rng: &mut ChaCha8Rng) -> Result<usize, CheckFailure> {
    let mut tl = new_timeline()?;
    let steps = rng.gen_range(20..120);
    for _ in 0..steps {
        let command = match rng.gen_range(0..12) {
            0 => Command::Restart,
            1 => Command::ActivateSkills,
            2 => Command::ToggleSound,
            3..=5 => Command::Back,
            6 => Command::Start,
            _ => Command::Continue,
        };
        tl.dispatch(command);
        if rng.gen_bool(0.5) {
            tl.run_until_idle();
            check_settled(&tl)?;
        } else {
            tl.advance_by(rng.gen_range(0..1500));
            check_session(tl.session())?;
        }
    }
    tl.run_until_idle();
    check_settled(&tl)?;
    Ok(steps)
}
