use clap::Parser;
use recipe_plan::utils::{logger, validation::Validate};
use recipe_plan::{CliConfig, PlanDocument};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting recipe-plan CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    // 載入並驗證計畫文件
    let plan = match PlanDocument::from_file(&config.plan_path) {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!("❌ Failed to load plan document: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = plan.validate() {
        tracing::error!("❌ Plan document validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        "✅ Plan document loaded: {} ({} milestones)",
        plan.project_name(),
        plan.milestone_count()
    );

    match config.format.as_str() {
        "json" => println!("{}", plan.to_json_pretty()?),
        _ => print_plan_text(&plan),
    }

    Ok(())
}

fn print_plan_text(plan: &PlanDocument) {
    println!("📋 {}", plan.project.name);
    println!("   {}", plan.project.description);
    println!();

    for (index, milestone) in plan.milestones.iter().enumerate() {
        println!("{:2}. [{}] {}", index + 1, milestone.id, milestone.title);
        println!("    {}", milestone.description);
        if let Some(details) = &milestone.details {
            println!("    {}", details);
        }
    }
}
