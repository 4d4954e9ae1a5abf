use sweetstand::config::Config;
use sweetstand::logging;
use sweetstand::ui;

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let config = Config::load()?;

    // The UI loop runs on this thread; the runtime is entered so the loop
    // can spawn the user fetch task onto it.
    let runtime = tokio::runtime::Runtime::new()?;
    let _enter = runtime.enter();

    ui::run(config)?;
    Ok(())
}
