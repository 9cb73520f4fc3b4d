use extman_domain::config::ClientConfig;
use extman_ui::{render, RenderOptions, UiCommand};
use std::io::IsTerminal;
use tracing::debug;

use super::{connect, prompt::StdinPrompt};

pub async fn run_interactive(config: &ClientConfig) -> anyhow::Result<()> {
    let mut controller = connect(config)?;
    let mut prompt = StdinPrompt::new();
    let options = RenderOptions {
        color: std::io::stdout().is_terminal(),
    };

    controller.load().await;
    println!("{}\n", render(controller.manager(), options));
    println!("type 'help' for commands");

    while let Some(line) = prompt.ask("> ").await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<UiCommand>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        debug!(?command, "Command received");

        controller.manager_mut().clear_notice();
        match command {
            UiCommand::Quit => break,
            UiCommand::Help => {
                println!("{}", UiCommand::HELP);
                continue;
            }
            UiCommand::Filter(filter) => controller.manager_mut().set_filter(filter),
            UiCommand::Theme => {
                controller.manager_mut().toggle_theme();
            }
            UiCommand::Refresh => controller.load().await,
            UiCommand::Toggle(id) => {
                if let Err(e) = controller.toggle(id).await {
                    println!("! {}", e);
                }
            }
            UiCommand::Remove(id) => {
                if let Err(e) = controller.remove(id, &mut prompt).await {
                    println!("! {}", e);
                }
            }
        }

        println!("{}\n", render(controller.manager(), options));
    }

    Ok(())
}
