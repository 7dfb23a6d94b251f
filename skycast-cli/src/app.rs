//! Interactive shell: the selected-location value, the autocomplete prompt,
//! and the prompt → fetch → render loop.

use anyhow::Result;
use inquire::autocompletion::{Autocomplete, Replacement};
use inquire::{CustomUserError, InquireError, Text};
use skycast_core::panel::PanelView;
use skycast_core::{CityDirectory, Config, WeatherPanel, provider_from_config};

use crate::view;

/// How many suggestions the prompt offers at once.
const MAX_SUGGESTIONS: usize = 8;

/// Suggestion source for the city prompt. Free text that matches nothing in
/// the list is still accepted and forwarded unchanged.
#[derive(Clone)]
pub struct CityCompleter {
    names: Vec<String>,
}

impl CityCompleter {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl Autocomplete for CityCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        let needle = input.trim().to_lowercase();
        Ok(self
            .names
            .iter()
            .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion)
    }
}

/// Run the interactive loop until the user leaves.
pub async fn run(config: &Config) -> Result<()> {
    let provider = provider_from_config(config)?;

    let names = CityDirectory::new().fetch_or_empty().await;
    tracing::info!(count = names.len(), "city directory loaded");
    if names.is_empty() {
        // Free text still works without the directory.
        println!("City list unavailable; type a name and press enter.");
    }

    let mut panel = WeatherPanel::new();

    loop {
        let prompt = Text::new("City:")
            .with_autocomplete(CityCompleter::new(names.clone()))
            .with_help_message("type to search, esc to clear, ctrl-c to quit")
            .prompt_skippable();

        match prompt {
            Ok(Some(input)) if !input.trim().is_empty() => {
                let name = input.trim().to_string();
                if let Some(ticket) = panel.select(Some(name)) {
                    let result = provider.forecast(&ticket.location).await;
                    let failed = result.is_err();
                    panel.complete(ticket.token, result);
                    if failed {
                        notify_failure(&panel);
                    }
                }
                show(&panel);
            }
            Ok(_) => {
                // Esc or blank input: clear an active selection, or leave.
                if panel.location().is_some() {
                    panel.select(None);
                    println!("Selection cleared.");
                } else {
                    break;
                }
            }
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn notify_failure(panel: &WeatherPanel) {
    match panel.view() {
        PanelView::Loaded(_) => println!("Could not refresh; showing previous data."),
        _ => println!("Could not fetch weather for this location."),
    }
}

fn show(panel: &WeatherPanel) {
    match panel.view() {
        PanelView::Hidden => {}
        PanelView::Loading => println!("Loading..."),
        PanelView::Loaded(snapshot) => {
            view::print_panel(snapshot, chrono::Local::now().date_naive());
        }
    }
}
