use crate::terminal::TerminalPresenter;
use crate::values::FormValues;
use anyhow::{anyhow, bail, Result};
use colored::Colorize;
use contact_form::{
    ContactFormConfig, HttpChannel, MemoryChannel, SubmissionChannel, SubmissionController,
    SubmitOutcome,
};
use contact_form_validation::FieldId;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

const MAX_ATTEMPTS: usize = 3;

pub async fn execute(file: &Path, config: &ContactFormConfig, dry_run: bool) -> Result<()> {
    let values = FormValues::load(file)?;

    if dry_run {
        let channel = MemoryChannel::new();
        let controller = run(channel, config, &values).await?;
        println!();
        println!("{}", "Payload (not sent):".yellow().bold());
        for payload in controller.channel().sent().await {
            for (name, value) in payload.entries() {
                println!("  {} = {:?}", name.cyan(), value);
            }
        }
        return Ok(());
    }

    if config.endpoint.url.trim().is_empty() {
        bail!(
            "No endpoint configured. Set [endpoint] url in the config file or {}",
            contact_form::config::ENDPOINT_ENV
        );
    }

    let channel = HttpChannel::new(&config.endpoint)?;
    println!("Endpoint: {}", channel.endpoint().cyan());
    run(channel, config, &values).await?;
    Ok(())
}

/// Feed the values through the controller, prompting for the challenge
/// until it is solved or attempts run out
async fn run<C: SubmissionChannel>(
    channel: C,
    config: &ContactFormConfig,
    values: &FormValues,
) -> Result<SubmissionController<C, TerminalPresenter>> {
    println!("{}", "Submitting contact form...".green().bold());

    let mut controller = SubmissionController::new(channel, TerminalPresenter::new(), config);
    for (field, value) in values.iter() {
        if field.is_select() {
            controller.change(field, value);
        } else {
            controller.input(field, value);
        }
    }
    controller.presenter_mut().echo_filtered = false;

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    for attempt in 1..=MAX_ATTEMPTS {
        print!("Answer: ");
        std::io::Write::flush(&mut std::io::stdout())?;
        let answer = stdin
            .next_line()
            .await?
            .ok_or_else(|| anyhow!("stdin closed before the challenge was answered"))?;
        controller.input(FieldId::ChallengeAnswer, answer.trim());

        match controller.submit().await {
            SubmitOutcome::Accepted { status } => {
                debug!(status, attempt, "submission accepted");
                return Ok(controller);
            }
            SubmitOutcome::Invalid(report) => {
                let only_challenge = report
                    .errors()
                    .iter()
                    .all(|e| e.field == FieldId::ChallengeAnswer);
                if !only_challenge {
                    bail!("{} field(s) failed validation", report.len());
                }
            }
            SubmitOutcome::Failed(e) => return Err(e.into()),
        }
    }

    bail!("challenge not solved after {} attempts", MAX_ATTEMPTS)
}
