//! The `marknote init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create marknote.toml
    if std::path::Path::new("marknote.toml").exists() {
        println!("marknote.toml already exists, skipping.");
    } else {
        std::fs::write("marknote.toml", SAMPLE_CONFIG)?;
        println!("Created marknote.toml");
    }

    // Create example catalog
    let catalog_path = std::path::Path::new("catalog.json");
    if catalog_path.exists() {
        println!("catalog.json already exists, skipping.");
    } else {
        std::fs::write(catalog_path, EXAMPLE_CATALOG)?;
        println!("Created catalog.json");
    }

    println!("\nNext steps:");
    println!("  1. Edit catalog.json with your tests");
    println!("  2. Run: marknote validate");
    println!("  3. Run: marknote compose --mark \"Algebra Basics=18\"");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# marknote configuration

catalog = "./catalog.json"

[message]
greeting = "Hi Sir,"
closing = "Thanks!"
signoff = "Regards"
"#;

const EXAMPLE_CATALOG: &str = r#"{
  "categories": [
    {
      "name": "Science",
      "subjects": [
        {
          "name": "Mathematics",
          "topics": [
            {
              "topic": "Algebra",
              "tests": [
                { "title": "Algebra Basics", "questions": "1-20", "isgiven": false, "totalQuestions": 20 },
                { "title": "Linear Equations", "questions": "1-25", "isgiven": false, "totalQuestions": 25 }
              ]
            },
            {
              "topic": "Geometry",
              "tests": [
                { "title": "Triangles", "questions": "1-15", "isgiven": true, "totalQuestions": 15 }
              ]
            }
          ]
        },
        {
          "name": "Physics",
          "topics": [
            {
              "topic": "Optics",
              "tests": [
                { "title": "Reflection and Refraction", "questions": "1-30", "isgiven": false, "totalQuestions": 30 }
              ]
            }
          ]
        }
      ]
    }
  ]
}
"#;
