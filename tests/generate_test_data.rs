//! Test data generator for TalentLink Matcher
//!
//! Writes a JSON candidate pool fixture that can be posted to
//! /api/v1/matches/rank for manual load testing.
//!
//! Run: cargo test --test generate_test_data -- --ignored

use std::fs::File;
use std::io::{BufWriter, Write};

use serde_json::json;

const NAMES: &[&str] = &[
    "Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Quinn", "Avery",
    "Blake", "Carter", "Dakota", "Emerson", "Finley", "Gray", "Hayden", "Indigo",
    "Jade", "Kai", "Lake", "Milo", "Nova", "Onyx", "Phoenix", "River", "Sage",
    "Skyler", "Tatum", "Unity", "Valentine", "Willow", "Xavier", "Zion", "Luna",
];

const SKILLS: &[&str] = &[
    "javascript", "js", "typescript", "ts", "python", "py", "java", "c#", "c++",
    "go", "rust", "php", "ruby", "html", "html5", "css", "css3", "react",
    "reactjs", "vue", "vuejs", "angular", "node", "nodejs", "express",
    "expressjs", "django", "flask", "spring", "sql", "mongodb", "mongo",
    "postgresql", "postgres", "mysql", "redis", "docker", "kubernetes", "aws",
    "azure", "git", "linux", "machine learning", "ml", "artificial intelligence",
    "ai", "data analysis", "excel", "figma", "photoshop",
];

const REQUIRED: &[&str] = &["javascript", "node", "mongodb", "sql", "react"];

// Simple random number generator using system time
fn get_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos() as u64
}

fn rand_int(max: usize) -> usize {
    (get_seed() % max as u64) as usize
}

fn rand_choices(options: &[&str], count: usize) -> Vec<String> {
    let mut result = Vec::new();
    let mut used = std::collections::HashSet::new();
    let mut attempts = 0;
    while result.len() < count.min(options.len()) && attempts < 100 {
        let idx = rand_int(options.len());
        if used.insert(idx) {
            result.push(options[idx].to_string());
        }
        attempts += 1;
    }
    result
}

#[test]
#[ignore = "Writes a fixture file; run on demand"]
fn generate_candidate_pool() -> Result<(), Box<dyn std::error::Error>> {
    let num_candidates = 1000;

    println!("Generating {} test candidates...", num_candidates);

    let mut candidates = Vec::new();
    for candidate_num in 0..num_candidates {
        std::thread::sleep(std::time::Duration::from_millis(1)); // Seed variation

        let skill_count = 2 + rand_int(8);
        candidates.push(json!({
            "candidateId": format!("test_candidate_{:04}", candidate_num),
            "name": format!("{} {}", NAMES[rand_int(NAMES.len())], candidate_num),
            "skills": rand_choices(SKILLS, skill_count),
        }));
    }

    let body = json!({
        "jobId": "load-test-job",
        "requiredSkills": REQUIRED,
        "candidates": candidates,
        "minMatchPercentage": 30.0,
    });

    let file = File::create("test_rank_request.json")?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &body)?;
    writer.flush()?;

    println!("Wrote test_rank_request.json ({} candidates)", num_candidates);
    Ok(())
}
