//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jobdeck_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use jobdeck_core::{
    BoardService, Category, Company, DecisionOutcome, JobApplication, Status,
};

fn sample_jobs() -> Vec<JobApplication> {
    let mut backend = JobApplication::new("Backend Developer", Category::Interested);
    backend.company = Company {
        name: "TechCorp".to_string(),
        size: "Enterprise".to_string(),
        industry: "Software".to_string(),
    };
    backend.location = "Berlin".to_string();
    backend.hybrid = true;
    backend.skills = vec!["Node.js".to_string(), "Express".to_string()];
    backend.percentage = Some(50);

    let mut frontend = JobApplication::new("Senior FE Developer", Category::Interview);
    frontend.company = Company {
        name: "Lolo.team".to_string(),
        size: "Startup".to_string(),
        industry: "SaaS".to_string(),
    };
    frontend.location = "Prague 3".to_string();
    frontend.on_site = true;
    frontend.remote = true;
    frontend.skills = vec!["Next.js".to_string(), "React".to_string()];
    frontend.status = Status::Interview {
        round: 1,
        description: None,
    };
    frontend.percentage = Some(99);

    let mut fullstack = JobApplication::new("Full Stack Engineer", Category::Decision);
    fullstack.company = Company {
        name: "Stripe".to_string(),
        size: "Financial Tech".to_string(),
        industry: "Payments".to_string(),
    };
    fullstack.location = "New York".to_string();
    fullstack.status = Status::Decision {
        outcome: DecisionOutcome::Offer,
    };

    vec![backend, frontend, fullstack]
}

fn main() {
    println!("jobdeck_core ping={}", jobdeck_core::ping());
    println!("jobdeck_core version={}", jobdeck_core::core_version());

    match BoardService::from_jobs(sample_jobs()) {
        Ok(board) => {
            for (category, jobs) in board.sections().iter() {
                println!("column={category} records={}", jobs.len());
                for job in jobs {
                    println!("  {} @ {}", job.role, job.company.name);
                }
            }
        }
        Err(err) => {
            eprintln!("sample board failed to load: {err}");
            std::process::exit(1);
        }
    }
}
