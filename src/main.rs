use anyhow::Result;
use question_solve_submit::services::solver_from_config;
use question_solve_submit::utils::logging;
use question_solve_submit::{Config, SolveFlow};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::load()?;
    logging::log_startup(&config);

    // 组装求解器并执行流程
    let solver = solver_from_config(&config);
    let flow = SolveFlow::new(&config, solver);
    let outcome = flow.run().await?;

    logging::log_finished(&outcome);

    Ok(())
}
