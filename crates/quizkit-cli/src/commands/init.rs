//! The `quizkit init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizkit.toml
    if std::path::Path::new("quizkit.toml").exists() {
        println!("quizkit.toml already exists, skipping.");
    } else {
        std::fs::write("quizkit.toml", SAMPLE_CONFIG)?;
        println!("Created quizkit.toml");
    }

    // Create sample content
    std::fs::create_dir_all("content")?;

    let catalog_path = std::path::Path::new("content/quizzes.json");
    if catalog_path.exists() {
        println!("content/quizzes.json already exists, skipping.");
    } else {
        std::fs::write(catalog_path, SAMPLE_CATALOG)?;
        println!("Created content/quizzes.json");
    }

    let topic_path = std::path::Path::new("content/fund-basics.json");
    if topic_path.exists() {
        println!("content/fund-basics.json already exists, skipping.");
    } else {
        std::fs::write(topic_path, SAMPLE_TOPIC)?;
        println!("Created content/fund-basics.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizkit validate");
    println!("  2. Run: quizkit play --quiz fund-basics");
    println!("  3. Run: quizkit history");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizkit configuration

content_dir = "content"
data_dir = ".quizkit"
default_question_count = 10
"#;

const SAMPLE_CATALOG: &str = r#"[
  {
    "id": "fund-basics",
    "title": "Fund Basics",
    "description": "Fund structure, LP/GP roles, and capital lifecycle",
    "part": 1,
    "chapter": "fund-basics",
    "totalQuestions": 3
  }
]
"#;

const SAMPLE_TOPIC: &str = r#"[
  {
    "id": "fund-basics-1",
    "chapter": "fund-basics",
    "section": "roles",
    "difficulty": "beginner",
    "type": "single",
    "question": "Who supplies most of the capital in a venture fund?",
    "options": [
      {"id": "a", "text": "Limited partners"},
      {"id": "b", "text": "General partners"},
      {"id": "c", "text": "Portfolio founders"}
    ],
    "correctAnswers": ["a"],
    "explanation": "LPs commit the bulk of the capital; GPs manage it.",
    "sourceUrl": "https://example.com/fund-basics"
  },
  {
    "id": "fund-basics-2",
    "chapter": "fund-basics",
    "section": "roles",
    "difficulty": "beginner",
    "type": "single",
    "question": "Who makes the investment decisions?",
    "options": [
      {"id": "a", "text": "Limited partners"},
      {"id": "b", "text": "General partners"}
    ],
    "correctAnswers": ["b"],
    "explanation": "GPs run the fund day to day.",
    "sourceUrl": "https://example.com/fund-basics"
  },
  {
    "id": "fund-basics-3",
    "chapter": "fund-basics",
    "section": "lifecycle",
    "difficulty": "intermediate",
    "type": "multiple",
    "question": "Which events trigger a capital call?",
    "options": [
      {"id": "a", "text": "A new investment closing"},
      {"id": "b", "text": "A fund anniversary"},
      {"id": "c", "text": "Management fees coming due"}
    ],
    "correctAnswers": ["a", "c"],
    "explanation": "Calls fund investments and fees, not anniversaries.",
    "sourceUrl": "https://example.com/fund-basics"
  }
]
"#;
