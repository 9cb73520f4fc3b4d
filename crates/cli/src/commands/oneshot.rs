use extman_domain::{config::ClientConfig, ExtensionFilter};
use extman_ui::{
    render, AutoConfirm, Confirm, RemoveOutcome, RemoveResolution, RenderOptions,
    ToggleResolution, ViewPhase,
};
use std::io::IsTerminal;

use super::{connect, prompt::StdinPrompt};

fn options() -> RenderOptions {
    RenderOptions {
        color: std::io::stdout().is_terminal(),
    }
}

pub async fn list(config: &ClientConfig, filter: ExtensionFilter) -> anyhow::Result<()> {
    let mut controller = connect(config)?;
    controller.load().await;
    controller.manager_mut().set_filter(filter);

    println!("{}", render(controller.manager(), options()));
    if let ViewPhase::Failed(message) = controller.manager().phase() {
        anyhow::bail!("{}", message);
    }
    Ok(())
}

pub async fn toggle(config: &ClientConfig, id: i64) -> anyhow::Result<()> {
    let mut controller = connect(config)?;
    controller.load().await;
    if let ViewPhase::Failed(message) = controller.manager().phase() {
        anyhow::bail!("{}", message);
    }

    match controller.toggle(id).await? {
        ToggleResolution::Confirmed | ToggleResolution::Evicted => {
            if let Some(record) = controller.manager().record(id) {
                println!("{} is now {}", record.extension.name, record.extension.status_str());
            }
            Ok(())
        }
        ToggleResolution::Reverted => anyhow::bail!(
            "{}",
            controller.manager().notice().unwrap_or("toggle failed")
        ),
        ToggleResolution::Stale => Ok(()),
    }
}

pub async fn remove(config: &ClientConfig, id: i64, yes: bool) -> anyhow::Result<()> {
    let mut controller = connect(config)?;
    controller.load().await;
    if let ViewPhase::Failed(message) = controller.manager().phase() {
        anyhow::bail!("{}", message);
    }

    let mut auto = AutoConfirm;
    let mut prompt = StdinPrompt::new();
    let confirm: &mut dyn Confirm = if yes { &mut auto } else { &mut prompt };

    match controller.remove(id, confirm).await? {
        RemoveOutcome::Cancelled => println!("Cancelled"),
        RemoveOutcome::Completed(RemoveResolution::Removed) => {
            println!("Extension {} removed", id)
        }
        RemoveOutcome::Completed(RemoveResolution::Failed { .. }) => anyhow::bail!(
            "{}",
            controller.manager().notice().unwrap_or("remove failed")
        ),
    }
    Ok(())
}
