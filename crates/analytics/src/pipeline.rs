use core_types::money::round_whole;
use core_types::PeriodRecord;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// A stage of the sales funnel, with a fixed share of the open pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PipelineStage {
    QualifiedLead,
    Discovery,
    ProposalSent,
    Negotiation,
    ClosedWon,
}

impl PipelineStage {
    /// Funnel order, widest first.
    pub const ALL: [PipelineStage; 5] = [
        PipelineStage::QualifiedLead,
        PipelineStage::Discovery,
        PipelineStage::ProposalSent,
        PipelineStage::Negotiation,
        PipelineStage::ClosedWon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PipelineStage::QualifiedLead => "Qualified Lead",
            PipelineStage::Discovery => "Discovery",
            PipelineStage::ProposalSent => "Proposal Sent",
            PipelineStage::Negotiation => "Negotiation",
            PipelineStage::ClosedWon => "Closed Won",
        }
    }

    pub fn weight(self) -> Decimal {
        match self {
            PipelineStage::QualifiedLead => dec!(0.35),
            PipelineStage::Discovery => dec!(0.25),
            PipelineStage::ProposalSent => dec!(0.20),
            PipelineStage::Negotiation => dec!(0.12),
            PipelineStage::ClosedWon => dec!(0.08),
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            PipelineStage::QualifiedLead => "#60a5fa",
            PipelineStage::Discovery => "#a78bfa",
            PipelineStage::ProposalSent => "#fbbf24",
            PipelineStage::Negotiation => "#34d399",
            PipelineStage::ClosedWon => "#22d3ee",
        }
    }
}

/// One weighted slice of the latest pipeline value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageBucket {
    pub stage: &'static str,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    pub color: &'static str,
}

/// Splits `latest.pipeline` across the five funnel stages.
///
/// Each bucket is rounded to whole units on its own; the buckets are not
/// renormalized, so their sum may differ from the pipeline by rounding.
pub fn decompose(latest: &PeriodRecord) -> Vec<StageBucket> {
    PipelineStage::ALL
        .iter()
        .map(|&stage| StageBucket {
            stage: stage.name(),
            value: round_whole(latest.pipeline * stage.weight()),
            color: stage.color(),
        })
        .collect()
}
