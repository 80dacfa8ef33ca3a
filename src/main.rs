mod bandit;
mod config;
mod errors;
mod grader;
mod rng;
mod sim;
mod strategies;

use clap::Parser;
use config::AppConfig;
use errors::AppError;
use grader::{grade_task1, grade_task2, grade_task3, AlgoSelection, GradeOutcome, TestCase};

use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bandit-grader")]
#[command(about = "Grade bandit strategies against reference regrets")]
struct Args {
    /// The task to grade. Valid values are: 1, 2, 3, all
    #[arg(long)]
    task: Option<String>,
    /// The algorithm to grade (task 1 only). Valid values are: ucb, kl_ucb, thompson, all
    #[arg(long)]
    algo: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TaskSelection {
    One,
    Two,
    Three,
    All,
}

impl TaskSelection {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(Self::One),
            "2" => Some(Self::Two),
            "3" => Some(Self::Three),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    fn covers(&self, task: TaskSelection) -> bool {
        *self == TaskSelection::All || *self == task
    }
}

fn parse_algo(raw: &str) -> Option<AlgoSelection> {
    match raw {
        "ucb" => Some(AlgoSelection::Ucb),
        "kl_ucb" => Some(AlgoSelection::KlUcb),
        "thompson" => Some(AlgoSelection::Thompson),
        "all" => Some(AlgoSelection::All),
        _ => None,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let Some(task) = args.task.as_deref() else {
        eprintln!("Please specify a task");
        return ExitCode::FAILURE;
    };
    let Some(task) = TaskSelection::parse(task) else {
        eprintln!("Invalid task");
        return ExitCode::FAILURE;
    };

    // --algo only narrows task 1; grading everything implies every algorithm
    let selection = if task == TaskSelection::One {
        let Some(algo) = args.algo.as_deref() else {
            eprintln!("Please specify an algorithm for task 1");
            return ExitCode::FAILURE;
        };
        match parse_algo(&algo.to_lowercase()) {
            Some(selection) => selection,
            None => {
                eprintln!("Invalid algorithm");
                return ExitCode::FAILURE;
            }
        }
    } else {
        AlgoSelection::All
    };

    match run(task, selection) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(task: TaskSelection, selection: AlgoSelection) -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let start = Instant::now();

    if task.covers(TaskSelection::One) {
        print_banner(1);
        for i in 1..=3 {
            println!("Testcase {i}");
            let testcase = load_testcase(&config, 1, i)?;
            for outcome in grade_task1(&testcase, selection, &config.sim)? {
                print_outcome(&outcome);
            }
            println!();
        }
    }

    if task.covers(TaskSelection::Two) {
        print_banner(2);
        for i in 1..=3 {
            println!("Testcase {i}");
            let testcase = load_testcase(&config, 2, i)?;
            print_outcome(&grade_task2(&testcase, &config.sim)?);
            println!();
        }
    }

    if task.covers(TaskSelection::Three) {
        print_banner(3);
        for i in 1..=3 {
            println!("Testcase {i}");
            let testcase = load_testcase(&config, 3, i)?;
            print_outcome(&grade_task3(&testcase, &config.sim)?);
            println!();
        }
    }

    println!("Time elapsed: {:.2} seconds", start.elapsed().as_secs_f64());

    Ok(())
}

fn load_testcase(config: &AppConfig, task: u8, index: u8) -> Result<TestCase, AppError> {
    let path = config
        .grader
        .testcase_dir
        .join(format!("task{task}-{index}.txt"));

    Ok(TestCase::load(&path)?)
}

fn print_banner(task: u8) {
    println!("{} Task {task} {}", "=".repeat(18), "=".repeat(18));
}

fn print_outcome(outcome: &GradeOutcome) {
    let verdict = if outcome.passed { "PASSED" } else { "FAILED" };
    println!(
        "{:18}: {}. Regret: {:.2}",
        outcome.name, verdict, outcome.regret
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_task_selection() {
        assert_eq!(TaskSelection::parse("1"), Some(TaskSelection::One));
        assert_eq!(TaskSelection::parse("2"), Some(TaskSelection::Two));
        assert_eq!(TaskSelection::parse("3"), Some(TaskSelection::Three));
        assert_eq!(TaskSelection::parse("all"), Some(TaskSelection::All));
        assert_eq!(TaskSelection::parse("4"), None);
    }

    #[test]
    fn all_covers_every_task() {
        assert!(TaskSelection::All.covers(TaskSelection::One));
        assert!(TaskSelection::All.covers(TaskSelection::Three));
        assert!(!TaskSelection::Two.covers(TaskSelection::One));
    }

    #[test]
    fn parses_algo_selections() {
        assert_eq!(parse_algo("ucb"), Some(AlgoSelection::Ucb));
        assert_eq!(parse_algo("kl_ucb"), Some(AlgoSelection::KlUcb));
        assert_eq!(parse_algo("thompson"), Some(AlgoSelection::Thompson));
        assert_eq!(parse_algo("all"), Some(AlgoSelection::All));
        assert_eq!(parse_algo("greedy"), None);
    }
}
