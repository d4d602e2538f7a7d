//! Offline adviser answering from keyword rules and the built-in tips.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::ChatCompletionProvider;
use crate::error::AdviserError;
use crate::tips::FINANCIAL_TIPS;
use crate::types::ChatMessage;

/// Reply delay used when the simulated adviser stands in for a real service.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1000);

const INVESTING_ADVICE: &str = "When investing, consider your risk tolerance, time horizon, and diversification across different asset classes.";
const DEBT_ADVICE: &str = "Focus on paying off high-interest debt first while making minimum payments on other debts. Consider debt consolidation if you have multiple high-interest loans.";
const SAVING_ADVICE: &str = "The 50/30/20 rule suggests allocating 50% of income to needs, 30% to wants, and 20% to savings and debt repayment.";

pub struct SimulatedAdviser {
    rng: Mutex<StdRng>,
    latency: Duration,
}

impl Default for SimulatedAdviser {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedAdviser {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            latency: Duration::ZERO,
        }
    }

    /// Deterministic tip selection.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Answers a question without any delay.
    pub fn respond(&self, question: &str) -> String {
        let question = question.to_lowercase();

        if question.contains("invest") {
            INVESTING_ADVICE.to_string()
        } else if question.contains("debt") || question.contains("loan") {
            DEBT_ADVICE.to_string()
        } else if question.contains("save") || question.contains("saving") {
            SAVING_ADVICE.to_string()
        } else {
            format!(
                "Based on your question, here's my advice: {}",
                self.random_tip()
            )
        }
    }

    fn random_tip(&self) -> &'static str {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        FINANCIAL_TIPS
            .choose(&mut *rng)
            .map(|tip| tip.content)
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatCompletionProvider for SimulatedAdviser {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn complete(
        &self,
        _history: &[ChatMessage],
        user_turn: &ChatMessage,
    ) -> Result<String, AdviserError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.respond(&user_turn.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_rules_apply_in_order() {
        let adviser = SimulatedAdviser::with_seed(7);

        assert_eq!(adviser.respond("Where should I INVEST?"), INVESTING_ADVICE);
        // "invest" wins over "debt"
        assert_eq!(
            adviser.respond("Invest or pay down debt?"),
            INVESTING_ADVICE
        );
        assert_eq!(adviser.respond("My car loan is huge"), DEBT_ADVICE);
        assert_eq!(adviser.respond("How much should I save?"), SAVING_ADVICE);
    }

    #[test]
    fn test_fallback_quotes_a_known_tip() {
        let adviser = SimulatedAdviser::with_seed(42);
        let reply = adviser.respond("What is a good budget?");

        let tip = reply
            .strip_prefix("Based on your question, here's my advice: ")
            .expect("fallback prefix");
        assert!(FINANCIAL_TIPS.iter().any(|t| t.content == tip));
    }

    #[test]
    fn test_same_seed_picks_same_tips() {
        let a = SimulatedAdviser::with_seed(3);
        let b = SimulatedAdviser::with_seed(3);
        for _ in 0..5 {
            assert_eq!(a.respond("hello"), b.respond("hello"));
        }
    }

    #[tokio::test]
    async fn test_complete_answers_the_user_turn() {
        let adviser = SimulatedAdviser::with_seed(1).with_latency(Duration::from_millis(1));
        let reply = adviser
            .complete(&[], &ChatMessage::user("Any saving tips?"))
            .await
            .unwrap();
        assert_eq!(reply, SAVING_ADVICE);
    }
}
