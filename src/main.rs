use clap::Parser;
use std::str::FromStr;
use stusched::application::{export_document, init, ConfigService, ScheduleService};
use stusched::cli::{self, Cli, Commands, ExamAction, SubjectAction};
use stusched::domain::input::{parse_date, parse_days, parse_time, require_text};
use stusched::domain::{ExamDraft, SubjectDraft, Weekday};
use stusched::error::Result;
use stusched::infrastructure::{FileStore, FileSystemRepository};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();

    match run(args) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_schedule() -> Result<(FileSystemRepository, ScheduleService<FileStore>)> {
    let repo = FileSystemRepository::discover()?;
    let service = ScheduleService::open(repo.file_store());
    Ok((repo, service))
}

fn run(args: Cli) -> Result<()> {
    match args.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("export_dir = {}", config.export_dir.display());
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: stusched config [--list | <key> [<value>]]");
                println!("Valid keys: export_dir, created");
                Ok(())
            }
        }
        Some(Commands::Subject { action }) => {
            let (_repo, mut service) = open_schedule()?;
            match action {
                SubjectAction::Add {
                    name,
                    teacher,
                    time,
                    days,
                } => {
                    let draft = SubjectDraft::new(
                        require_text("name", &name)?,
                        require_text("teacher", &teacher)?,
                        parse_time(&time)?,
                        parse_days(&days)?,
                    );
                    let subject = service.add_subject(draft);
                    println!("Added subject {} [{}]", subject.name, subject.id);
                }
                SubjectAction::Remove { id } => {
                    if service.remove_subject(&id) {
                        println!("Removed subject {}", id);
                    } else {
                        println!("No subject with id {}", id);
                    }
                }
                SubjectAction::List => {
                    println!("{}", cli::format_subject_list(service.schedule().subjects()));
                }
            }
            Ok(())
        }
        Some(Commands::Exam { action }) => {
            let (_repo, mut service) = open_schedule()?;
            match action {
                ExamAction::Add {
                    name,
                    date,
                    time,
                    location,
                } => {
                    let draft = ExamDraft::new(
                        require_text("name", &name)?,
                        parse_date(&date)?,
                        parse_time(&time)?,
                        require_text("location", &location)?,
                    );
                    let exam = service.add_exam(draft);
                    println!("Added exam {} [{}]", exam.name, exam.id);
                }
                ExamAction::Remove { id } => {
                    if service.remove_exam(&id) {
                        println!("Removed exam {}", id);
                    } else {
                        println!("No exam with id {}", id);
                    }
                }
                ExamAction::List => {
                    println!("{}", cli::format_exam_list(service.schedule().exams()));
                }
            }
            Ok(())
        }
        Some(Commands::Week { day }) => {
            let (_repo, service) = open_schedule()?;
            let grouping = service.day_grouping();

            match day {
                Some(day) => {
                    let weekday = if day.trim().eq_ignore_ascii_case("today") {
                        Weekday::today()
                    } else {
                        Weekday::from_str(&day)?
                    };
                    let output = cli::format_day(weekday, grouping.for_day(weekday));
                    println!("{}", output.trim_end());
                }
                None => {
                    print!(
                        "{}",
                        cli::format_week(&grouping, service.schedule().exams())
                    );
                }
            }
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let (repo, service) = open_schedule()?;
            let path = export_document(&repo, &service, output)?;
            println!("Exported schedule to {}", path.display());
            Ok(())
        }
        Some(Commands::Clear) => {
            let (_repo, mut service) = open_schedule()?;
            service.clear();
            println!("Cleared all subjects and exams");
            Ok(())
        }
        None => {
            println!("stusched - Student schedule tracker");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
