//! Implements InputPort. Inquire-based interactive menu over the ledger and advisor.

use crate::adapters::ui::progress::spinner;
use crate::domain::{
    BusinessAnalysis, BusinessId, BusinessListing, DomainError, NarrativeResult, NewBusiness,
    NewTransaction, TransactionKind, parse_amount,
};
use crate::ports::InputPort;
use crate::usecases::{AnalysisService, LedgerService};
use async_trait::async_trait;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::validator::Validation;
use inquire::{CustomUserError, Select, Text};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Applies the prompt theme globally.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::DarkYellow))
        .with_answered_prompt_prefix(Styled::new("✔").with_fg(Color::LightGreen));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    CreateBusiness,
    RecordTransaction,
    ListBusinesses,
    Analyze,
    AskHenry,
    Status,
    Exit,
}

impl MenuItem {
    const ALL: [MenuItem; 7] = [
        MenuItem::CreateBusiness,
        MenuItem::RecordTransaction,
        MenuItem::ListBusinesses,
        MenuItem::Analyze,
        MenuItem::AskHenry,
        MenuItem::Status,
        MenuItem::Exit,
    ];
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuItem::CreateBusiness => "Create business",
            MenuItem::RecordTransaction => "Record transaction",
            MenuItem::ListBusinesses => "List businesses",
            MenuItem::Analyze => "Financial analysis",
            MenuItem::AskHenry => "Ask Henry",
            MenuItem::Status => "Status",
            MenuItem::Exit => "Exit",
        };
        f.write_str(label)
    }
}

/// Display wrapper so businesses can be picked from a Select.
struct BusinessChoice(BusinessListing);

impl fmt::Display for BusinessChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}, {} transactions)",
            self.0.id, self.0.name, self.0.sector, self.0.transaction_count
        )
    }
}

/// Outcome of a prompt: answered, or backed out with Esc.
enum Prompted<T> {
    Answer(T),
    Back,
}

fn prompted<T>(result: Result<T, InquireError>) -> Result<Prompted<T>, DomainError> {
    match result {
        Ok(v) => Ok(Prompted::Answer(v)),
        Err(InquireError::OperationCanceled) => Ok(Prompted::Back),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

/// Empty answers become `None` so the ledger applies its defaults.
fn optional(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    ledger: Arc<LedgerService>,
    analysis: Arc<AnalysisService>,
    currency: String,
}

impl TuiInputPort {
    pub fn new(ledger: Arc<LedgerService>, analysis: Arc<AnalysisService>, currency: String) -> Self {
        Self {
            ledger,
            analysis,
            currency,
        }
    }

    async fn pick_business(&self, message: &str) -> Result<Option<BusinessId>, DomainError> {
        let listings = self.ledger.list_businesses().await?;
        if listings.is_empty() {
            println!("No businesses yet. Create one first.");
            return Ok(None);
        }
        let choices: Vec<BusinessChoice> = listings.into_iter().map(BusinessChoice).collect();
        match prompted(Select::new(message, choices).prompt())? {
            Prompted::Answer(choice) => Ok(Some(choice.0.id)),
            Prompted::Back => Ok(None),
        }
    }

    async fn create_business(&self) -> Result<(), DomainError> {
        let Prompted::Answer(name) = prompted(Text::new("Business name:").prompt())? else {
            return Ok(());
        };
        let Prompted::Answer(sector) =
            prompted(Text::new("Sector:").with_placeholder("General").prompt())?
        else {
            return Ok(());
        };
        let Prompted::Answer(location) =
            prompted(Text::new("Location:").with_placeholder("Maputo").prompt())?
        else {
            return Ok(());
        };

        let business = self
            .ledger
            .create_business(NewBusiness {
                name: optional(name),
                sector: optional(sector),
                location: optional(location),
            })
            .await?;
        println!("Business '{}' created with id {}.", business.name, business.id);
        Ok(())
    }

    async fn record_transaction(&self) -> Result<(), DomainError> {
        let Some(business_id) = self.pick_business("Record for which business?").await? else {
            return Ok(());
        };
        let Prompted::Answer(kind) = prompted(
            Select::new("Kind:", vec![TransactionKind::Sale, TransactionKind::Cost]).prompt(),
        )?
        else {
            return Ok(());
        };
        let amount_prompt = format!("Amount ({}):", self.currency);
        let Prompted::Answer(raw_amount) = prompted(
            Text::new(&amount_prompt)
                .with_validator(|input: &str| -> Result<Validation, CustomUserError> {
                    Ok(match parse_amount(input) {
                        Ok(_) => Validation::Valid,
                        Err(e) => Validation::Invalid(e.to_string().into()),
                    })
                })
                .prompt(),
        )?
        else {
            return Ok(());
        };
        let Prompted::Answer(category) =
            prompted(Text::new("Category:").with_placeholder("other").prompt())?
        else {
            return Ok(());
        };
        let Prompted::Answer(description) = prompted(Text::new("Description:").prompt())? else {
            return Ok(());
        };

        let transaction = self
            .ledger
            .record_transaction(
                business_id,
                NewTransaction {
                    amount: parse_amount(&raw_amount)?,
                    kind,
                    category: optional(category),
                    description: optional(description),
                },
            )
            .await?;
        let total = self.ledger.business(business_id).await?.total_transactions();
        println!(
            "{} of {:.2} {} recorded (transaction #{}, {} total).",
            transaction.kind, transaction.amount, self.currency, transaction.id, total
        );
        Ok(())
    }

    async fn list_businesses(&self) -> Result<(), DomainError> {
        let listings = self.ledger.list_businesses().await?;
        if listings.is_empty() {
            println!("No businesses registered.");
            return Ok(());
        }
        println!("{:>4}  {:<24} {:<16} {:>12}", "ID", "NAME", "SECTOR", "TRANSACTIONS");
        for l in &listings {
            println!(
                "{:>4}  {:<24} {:<16} {:>12}",
                l.id, l.name, l.sector, l.transaction_count
            );
        }
        println!("{} business(es).", listings.len());
        Ok(())
    }

    fn print_analysis(&self, analysis: &BusinessAnalysis) {
        let s = &analysis.summary;
        let cur = &self.currency;
        println!();
        println!(
            "== {} ({}, {}) ==",
            analysis.profile.name, analysis.profile.sector, analysis.profile.location
        );
        println!("Transactions: {}", analysis.total_transactions);
        println!("Revenue:      {:.2} {}", s.revenue, cur);
        println!("Costs:        {:.2} {}", s.costs, cur);
        println!("Net profit:   {:.2} {}", s.net_profit, cur);
        println!("Margin:       {:.1}%", s.margin);
        println!("Health:       {}", s.health_band);
        println!();
        let label = match &analysis.narrative {
            NarrativeResult::Narrative(_) => "Henry says",
            NarrativeResult::Unconfigured(_) => "Advisor",
            NarrativeResult::FallbackUsed(_) => "Advisor unavailable, basic report",
        };
        println!("{}:\n{}", label, analysis.narrative.text());
        println!();
    }

    async fn analyze(&self) -> Result<(), DomainError> {
        let Some(business_id) = self.pick_business("Analyze which business?").await? else {
            return Ok(());
        };
        let pb = spinner("Analyzing...");
        let result = self.analysis.analyze(business_id).await;
        pb.finish_and_clear();
        self.print_analysis(&result?);
        Ok(())
    }

    async fn ask_henry(&self) -> Result<(), DomainError> {
        let Prompted::Answer(question) = prompted(
            Text::new("Your question:")
                .with_validator(|input: &str| -> Result<Validation, CustomUserError> {
                    Ok(if input.trim().is_empty() {
                        Validation::Invalid("Please type a question".into())
                    } else {
                        Validation::Valid
                    })
                })
                .prompt(),
        )?
        else {
            return Ok(());
        };

        let listings = self.ledger.list_businesses().await?;
        let business_id = if listings.is_empty() {
            None
        } else {
            let mut options = vec!["No business context".to_string()];
            options.extend(listings.iter().map(|l| format!("[{}] {}", l.id, l.name)));
            match prompted(Select::new("Use figures from:", options).raw_prompt())? {
                Prompted::Answer(choice) if choice.index > 0 => {
                    Some(listings[choice.index - 1].id)
                }
                Prompted::Answer(_) => None,
                Prompted::Back => return Ok(()),
            }
        };

        let pb = spinner("Henry is thinking...");
        let result = self.analysis.ask(&question, business_id).await;
        pb.finish_and_clear();
        let answer = result?;
        println!("\nHenry:\n{}\n", answer.answer);
        Ok(())
    }

    async fn status(&self) -> Result<(), DomainError> {
        let status = self.analysis.status().await?;
        println!(
            "Henry v{} | businesses: {} | advisor: {} | {}",
            status.version,
            status.total_businesses,
            if status.advisor_configured {
                "configured"
            } else {
                "not configured"
            },
            status.checked_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let choice = match prompted(Select::new("Main menu", MenuItem::ALL.to_vec()).prompt())? {
                Prompted::Answer(item) => item,
                Prompted::Back => MenuItem::Exit,
            };

            let outcome = match choice {
                MenuItem::CreateBusiness => self.create_business().await,
                MenuItem::RecordTransaction => self.record_transaction().await,
                MenuItem::ListBusinesses => self.list_businesses().await,
                MenuItem::Analyze => self.analyze().await,
                MenuItem::AskHenry => self.ask_henry().await,
                MenuItem::Status => self.status().await,
                MenuItem::Exit => return Ok(()),
            };

            match outcome {
                Ok(()) => {}
                // Terminal failures end the session; domain errors are shown and the menu continues.
                Err(e @ DomainError::Ui(_)) => return Err(e),
                Err(e) => {
                    warn!(action = %choice, error = %e, "action failed");
                    println!("Error: {}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_blank_is_none() {
        assert_eq!(optional("  ".into()), None);
        assert_eq!(optional(" Loja ".into()), Some("Loja".to_string()));
    }

    #[test]
    fn test_business_choice_label() {
        let choice = BusinessChoice(BusinessListing {
            id: BusinessId(2),
            name: "Loja A".into(),
            sector: "Retail".into(),
            transaction_count: 3,
        });
        assert_eq!(choice.to_string(), "[2] Loja A (Retail, 3 transactions)");
    }

    #[test]
    fn test_menu_labels() {
        assert_eq!(MenuItem::AskHenry.to_string(), "Ask Henry");
        assert_eq!(MenuItem::ALL.last(), Some(&MenuItem::Exit));
    }

    #[test]
    fn test_cancel_is_back() {
        assert!(matches!(
            prompted::<()>(Err(InquireError::OperationCanceled)),
            Ok(Prompted::Back)
        ));
        assert!(matches!(
            prompted::<()>(Err(InquireError::OperationInterrupted)),
            Err(DomainError::Ui(_))
        ));
    }
}
