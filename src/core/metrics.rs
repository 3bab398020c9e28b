#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Currency,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKey {
    TotalValue,
    CostToExercise,
    Return,
    PreferredPrice,
    RevenueMultiple,
}

impl MetricKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::TotalValue => "totalValue",
            MetricKey::CostToExercise => "costToExercise",
            MetricKey::Return => "return",
            MetricKey::PreferredPrice => "preferredPrice",
            MetricKey::RevenueMultiple => "revenueMultiple",
        }
    }
}

/// Static presentation rules for one derived figure.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub key: MetricKey,
    pub description: &'static str,
    pub sub_description: Option<&'static str>,
    pub kind: ValueKind,
    pub explanation: Option<&'static str>,
}

const REVENUE_MULTIPLE_EXPLANATION: &str = "An acquisition is more realistic when the Revenue \
Multiple is low; a smaller differential between revenue and value means the purchaser is more \
likely to make a return on their investment.\nBenchmark this multiple against companies in the \
same industry/business and at the same stage of growth.\nAs a general rule, a 10+ multiplier \
indicates a bet on a major growth company.";

/// Descriptors in presentation order. Results are always emitted in this
/// order; nothing else decides row placement.
pub static DESCRIPTORS: [FieldDescriptor; 5] = [
    FieldDescriptor {
        key: MetricKey::TotalValue,
        description: "Total value of your shares",
        sub_description: None,
        kind: ValueKind::Currency,
        explanation: None,
    },
    FieldDescriptor {
        key: MetricKey::CostToExercise,
        description: "Your cost to exercise options",
        sub_description: None,
        kind: ValueKind::Currency,
        explanation: None,
    },
    FieldDescriptor {
        key: MetricKey::Return,
        description: "Your return",
        sub_description: None,
        kind: ValueKind::Currency,
        explanation: None,
    },
    FieldDescriptor {
        key: MetricKey::PreferredPrice,
        description: "Preferred Price",
        sub_description: Some("Strike Price derived from valuation"),
        kind: ValueKind::Currency,
        explanation: None,
    },
    FieldDescriptor {
        key: MetricKey::RevenueMultiple,
        description: "Revenue Multiple",
        sub_description: Some("Is this a good bet?"),
        kind: ValueKind::Number,
        explanation: Some(REVENUE_MULTIPLE_EXPLANATION),
    },
];

pub fn descriptor(key: MetricKey) -> &'static FieldDescriptor {
    match key {
        MetricKey::TotalValue => &DESCRIPTORS[0],
        MetricKey::CostToExercise => &DESCRIPTORS[1],
        MetricKey::Return => &DESCRIPTORS[2],
        MetricKey::PreferredPrice => &DESCRIPTORS[3],
        MetricKey::RevenueMultiple => &DESCRIPTORS[4],
    }
}
