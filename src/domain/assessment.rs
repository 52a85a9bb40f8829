//! Qualitative assessment of strategy statistics.
//!
//! Pure threshold classifiers over the numbers the API reports for a
//! strategy: win rate, risk-to-reward, average profit/loss and maximum
//! drawdown. Each classifier is total over its stated domain and maps an
//! input to exactly one band.

use std::fmt;

use super::error::TradeMateError;

/// Win-rate band over a percentage in [0, 100]. Thresholds are inclusive
/// lower bounds checked from the top down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinRateBand {
    Unrealistic,
    Exceptional,
    Excellent,
    VeryStrong,
    Strong,
    AboveAverage,
    Average,
    Moderate,
    BelowAverage,
    Speculative,
    HighRisk,
}

impl WinRateBand {
    pub fn classify(win_rate: f64) -> Self {
        if win_rate >= 95.0 {
            WinRateBand::Unrealistic
        } else if win_rate >= 89.0 {
            WinRateBand::Exceptional
        } else if win_rate >= 80.0 {
            WinRateBand::Excellent
        } else if win_rate >= 75.0 {
            WinRateBand::VeryStrong
        } else if win_rate >= 65.0 {
            WinRateBand::Strong
        } else if win_rate >= 55.0 {
            WinRateBand::AboveAverage
        } else if win_rate >= 49.0 {
            WinRateBand::Average
        } else if win_rate >= 35.0 {
            WinRateBand::Moderate
        } else if win_rate >= 25.0 {
            WinRateBand::BelowAverage
        } else if win_rate >= 10.0 {
            WinRateBand::Speculative
        } else {
            WinRateBand::HighRisk
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            WinRateBand::Unrealistic => "Unrealistic Strategy | likely overfitted.",
            WinRateBand::Exceptional => "Exceptional Strategy | cautious of overfitting.",
            WinRateBand::Excellent => "Excellent Strategy | verify consistency.",
            WinRateBand::VeryStrong => "Very strong Strategy | monitor for sustainability.",
            WinRateBand::Strong => "Strong Strategy | likely profitable.",
            WinRateBand::AboveAverage => {
                "Above average Strategy | potential for profitability."
            }
            WinRateBand::Average => "Average Strategy | balance with risk-to-reward.",
            WinRateBand::Moderate => "Moderate Strategy | consider strategy refinement.",
            WinRateBand::BelowAverage => "Below average Strategy | assess risk management.",
            WinRateBand::Speculative => "Speculative Strategy | requires high risk-to-reward.",
            WinRateBand::HighRisk => "High risk Strategy | likely unprofitable.",
        }
    }
}

impl fmt::Display for WinRateBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A parsed "risk:reward" ratio, e.g. "1:3".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskReward {
    pub risk: f64,
    pub reward: f64,
}

impl RiskReward {
    /// Parse the API's "risk:reward" string. Both sides must be finite and
    /// the risk side strictly positive.
    pub fn parse(s: &str) -> Result<Self, TradeMateError> {
        let (risk_str, reward_str) = s
            .split_once(':')
            .ok_or_else(|| TradeMateError::validation("risk-to-reward", "expected risk:reward"))?;
        let risk: f64 = risk_str.trim().parse().map_err(|_| {
            TradeMateError::validation("risk-to-reward", format!("bad risk side '{risk_str}'"))
        })?;
        let reward: f64 = reward_str.trim().parse().map_err(|_| {
            TradeMateError::validation("risk-to-reward", format!("bad reward side '{reward_str}'"))
        })?;
        if !risk.is_finite() || risk <= 0.0 {
            return Err(TradeMateError::validation(
                "risk-to-reward",
                "risk side must be a positive number",
            ));
        }
        if !reward.is_finite() || reward < 0.0 {
            return Err(TradeMateError::validation(
                "risk-to-reward",
                "reward side must be a non-negative number",
            ));
        }
        Ok(Self { risk, reward })
    }

    /// Reward earned per unit of risk.
    pub fn ratio(self) -> f64 {
        self.reward / self.risk
    }

    pub fn band(self) -> RiskRewardBand {
        RiskRewardBand::classify(self.ratio())
    }
}

/// Risk-to-reward tier over a reward/risk ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskRewardBand {
    Excellent,
    Good,
    Average,
    BelowAverage,
    Poor,
}

impl RiskRewardBand {
    pub fn classify(ratio: f64) -> Self {
        if ratio >= 3.0 {
            RiskRewardBand::Excellent
        } else if ratio >= 2.0 {
            RiskRewardBand::Good
        } else if ratio >= 1.5 {
            RiskRewardBand::Average
        } else if ratio >= 1.0 {
            RiskRewardBand::BelowAverage
        } else {
            RiskRewardBand::Poor
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RiskRewardBand::Excellent => "Excellent risk-to-reward ratio | Highly favorable.",
            RiskRewardBand::Good => "Good risk-to-reward ratio | Favorable.",
            RiskRewardBand::Average => "Average risk-to-reward ratio | Acceptable.",
            RiskRewardBand::BelowAverage => {
                "Below average risk-to-reward ratio | Needs improvement."
            }
            RiskRewardBand::Poor => "Poor risk-to-reward ratio | Unfavorable.",
        }
    }
}

impl fmt::Display for RiskRewardBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Direction of the average profit/loss figure. `None` for non-finite input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitTrend {
    Negative,
    Breakeven,
    Positive,
}

impl ProfitTrend {
    pub fn classify(average_profit_loss: f64) -> Option<Self> {
        if !average_profit_loss.is_finite() {
            None
        } else if average_profit_loss < 0.0 {
            Some(ProfitTrend::Negative)
        } else if average_profit_loss == 0.0 {
            Some(ProfitTrend::Breakeven)
        } else {
            Some(ProfitTrend::Positive)
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ProfitTrend::Negative => {
                "Negative Average Profit/Loss | Strategy may need adjustments."
            }
            ProfitTrend::Breakeven => "Break-even Average Profit/Loss | Strategy is neutral.",
            ProfitTrend::Positive => "Positive Average Profit/Loss | Strategy is profitable.",
        }
    }
}

/// Maximum-drawdown severity over a percentage. `None` for negative or
/// non-finite input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawdownBand {
    Minimal,
    Low,
    Moderate,
    Elevated,
    High,
    VeryHigh,
    Extreme,
    Unacceptable,
}

impl DrawdownBand {
    pub fn classify(drawdown_pct: f64) -> Option<Self> {
        if !drawdown_pct.is_finite() || drawdown_pct < 0.0 {
            return None;
        }
        Some(if drawdown_pct < 5.0 {
            DrawdownBand::Minimal
        } else if drawdown_pct < 10.0 {
            DrawdownBand::Low
        } else if drawdown_pct < 15.0 {
            DrawdownBand::Moderate
        } else if drawdown_pct < 20.0 {
            DrawdownBand::Elevated
        } else if drawdown_pct < 25.0 {
            DrawdownBand::High
        } else if drawdown_pct < 30.0 {
            DrawdownBand::VeryHigh
        } else if drawdown_pct < 50.0 {
            DrawdownBand::Extreme
        } else {
            DrawdownBand::Unacceptable
        })
    }

    pub fn message(self) -> &'static str {
        match self {
            DrawdownBand::Minimal => {
                "Minimal risk | Indicates a stable and low-volatility strategy."
            }
            DrawdownBand::Low => "Low risk | Strategy experiences occasional small downturns.",
            DrawdownBand::Moderate => {
                "Moderate risk | Some noticeable fluctuations; assess risk tolerance."
            }
            DrawdownBand::Elevated => {
                "Elevated risk | Significant drawdowns; may not suit all investors."
            }
            DrawdownBand::High => {
                "High risk | Substantial potential losses; requires careful consideration."
            }
            DrawdownBand::VeryHigh => {
                "Very high risk | Strategy may not be sustainable long-term."
            }
            DrawdownBand::Extreme => "Extreme risk | Likely unsuitable for most investors.",
            DrawdownBand::Unacceptable => {
                "Unacceptable risk | Strategy poses significant capital preservation concerns."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn win_rate_band_boundaries_are_inclusive() {
        assert_eq!(WinRateBand::classify(95.0), WinRateBand::Unrealistic);
        assert_eq!(WinRateBand::classify(94.999), WinRateBand::Exceptional);
        assert_eq!(WinRateBand::classify(89.0), WinRateBand::Exceptional);
        assert_eq!(WinRateBand::classify(80.0), WinRateBand::Excellent);
        assert_eq!(WinRateBand::classify(79.999), WinRateBand::VeryStrong);
        assert_eq!(WinRateBand::classify(75.0), WinRateBand::VeryStrong);
        assert_eq!(WinRateBand::classify(65.0), WinRateBand::Strong);
        assert_eq!(WinRateBand::classify(55.0), WinRateBand::AboveAverage);
        assert_eq!(WinRateBand::classify(49.0), WinRateBand::Average);
        assert_eq!(WinRateBand::classify(35.0), WinRateBand::Moderate);
        assert_eq!(WinRateBand::classify(25.0), WinRateBand::BelowAverage);
        assert_eq!(WinRateBand::classify(10.0), WinRateBand::Speculative);
        assert_eq!(WinRateBand::classify(9.999), WinRateBand::HighRisk);
        assert_eq!(WinRateBand::classify(0.0), WinRateBand::HighRisk);
        assert_eq!(WinRateBand::classify(100.0), WinRateBand::Unrealistic);
    }

    #[test]
    fn win_rate_messages_match_bands() {
        assert!(WinRateBand::classify(96.0).message().starts_with("Unrealistic"));
        assert!(WinRateBand::classify(5.0).message().starts_with("High risk"));
    }

    proptest! {
        // Totality: every percentage maps to exactly one band.
        #[test]
        fn win_rate_classifier_is_total(p in 0.0f64..=100.0f64) {
            let band = WinRateBand::classify(p);
            let again = WinRateBand::classify(p);
            prop_assert_eq!(band, again);
            // The band's threshold actually admits p.
            let lower = match band {
                WinRateBand::Unrealistic => 95.0,
                WinRateBand::Exceptional => 89.0,
                WinRateBand::Excellent => 80.0,
                WinRateBand::VeryStrong => 75.0,
                WinRateBand::Strong => 65.0,
                WinRateBand::AboveAverage => 55.0,
                WinRateBand::Average => 49.0,
                WinRateBand::Moderate => 35.0,
                WinRateBand::BelowAverage => 25.0,
                WinRateBand::Speculative => 10.0,
                WinRateBand::HighRisk => 0.0,
            };
            prop_assert!(p >= lower);
        }
    }

    #[test]
    fn risk_reward_parses_one_to_three_as_excellent() {
        let rr = RiskReward::parse("1:3").unwrap();
        assert_relative_eq!(rr.ratio(), 3.0);
        assert_eq!(rr.band(), RiskRewardBand::Excellent);
    }

    #[test]
    fn risk_reward_parse_accepts_whitespace_and_decimals() {
        let rr = RiskReward::parse(" 2 : 3.5 ").unwrap();
        assert_relative_eq!(rr.ratio(), 1.75);
        assert_eq!(rr.band(), RiskRewardBand::Average);
    }

    #[test]
    fn risk_reward_parse_rejects_malformed_input() {
        assert!(RiskReward::parse("3").is_err());
        assert!(RiskReward::parse("a:b").is_err());
        assert!(RiskReward::parse("0:3").is_err());
        assert!(RiskReward::parse("-1:3").is_err());
        assert!(RiskReward::parse("1:-2").is_err());
        assert!(RiskReward::parse("").is_err());
    }

    #[test]
    fn risk_reward_band_tiers() {
        assert_eq!(RiskRewardBand::classify(3.0), RiskRewardBand::Excellent);
        assert_eq!(RiskRewardBand::classify(2.0), RiskRewardBand::Good);
        assert_eq!(RiskRewardBand::classify(1.5), RiskRewardBand::Average);
        assert_eq!(RiskRewardBand::classify(1.0), RiskRewardBand::BelowAverage);
        assert_eq!(RiskRewardBand::classify(0.99), RiskRewardBand::Poor);
        assert_eq!(RiskRewardBand::classify(0.0), RiskRewardBand::Poor);
    }

    #[test]
    fn profit_trend_sign_buckets() {
        assert_eq!(ProfitTrend::classify(-0.01), Some(ProfitTrend::Negative));
        assert_eq!(ProfitTrend::classify(0.0), Some(ProfitTrend::Breakeven));
        assert_eq!(ProfitTrend::classify(12.5), Some(ProfitTrend::Positive));
        assert_eq!(ProfitTrend::classify(f64::NAN), None);
        assert_eq!(ProfitTrend::classify(f64::INFINITY), None);
    }

    #[test]
    fn drawdown_band_ranges() {
        assert_eq!(DrawdownBand::classify(0.0), Some(DrawdownBand::Minimal));
        assert_eq!(DrawdownBand::classify(4.999), Some(DrawdownBand::Minimal));
        assert_eq!(DrawdownBand::classify(5.0), Some(DrawdownBand::Low));
        assert_eq!(DrawdownBand::classify(12.0), Some(DrawdownBand::Moderate));
        assert_eq!(DrawdownBand::classify(17.5), Some(DrawdownBand::Elevated));
        assert_eq!(DrawdownBand::classify(22.0), Some(DrawdownBand::High));
        assert_eq!(DrawdownBand::classify(27.0), Some(DrawdownBand::VeryHigh));
        assert_eq!(DrawdownBand::classify(35.0), Some(DrawdownBand::Extreme));
        assert_eq!(DrawdownBand::classify(50.0), Some(DrawdownBand::Unacceptable));
        assert_eq!(DrawdownBand::classify(-1.0), None);
        assert_eq!(DrawdownBand::classify(f64::NAN), None);
    }
}
