use super::{
    format::format_value,
    inputs::InputValues,
    metrics::{
        descriptor,
        FieldDescriptor,
        MetricKey,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct DerivedResult {
    pub value: f64,
    pub descriptor: &'static FieldDescriptor,
}

impl DerivedResult {
    fn new(key: MetricKey, value: f64) -> Self {
        Self { value, descriptor: descriptor(key) }
    }

    pub fn key(&self) -> MetricKey {
        self.descriptor.key
    }

    pub fn formatted(&self) -> String {
        format_value(self.value, self.descriptor.kind)
    }
}

/// The five derived figures, in presentation order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    rows: [DerivedResult; 5],
}

impl ResultSet {
    pub fn rows(&self) -> &[DerivedResult] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DerivedResult> {
        self.rows.iter()
    }

    pub fn get(&self, key: MetricKey) -> f64 {
        self.rows.iter().find(|row| row.key() == key).map(|row| row.value).unwrap_or(0.0)
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a DerivedResult;
    type IntoIter = std::slice::Iter<'a, DerivedResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Runs the formulas, or returns `None` when any input is zero.
///
/// Zero and "not entered" are the same thing here: none of the five
/// quantities is meaningful at zero, and the gate is what keeps the two
/// divisions safe.
pub fn calculate(inputs: &InputValues) -> Option<ResultSet> {
    if !inputs.is_complete() {
        return None;
    }

    let preferred_price = inputs.valuation / inputs.diluted_shares;
    let total_value =
        (inputs.valuation / inputs.diluted_shares - inputs.strike_price) * inputs.shares;
    let cost_to_exercise = inputs.strike_price * inputs.shares;
    let net_return = total_value - cost_to_exercise;
    let revenue_multiple = inputs.valuation / inputs.revenue;

    Some(ResultSet {
        rows: [
            DerivedResult::new(MetricKey::TotalValue, total_value),
            DerivedResult::new(MetricKey::CostToExercise, cost_to_exercise),
            DerivedResult::new(MetricKey::Return, net_return),
            DerivedResult::new(MetricKey::PreferredPrice, preferred_price),
            DerivedResult::new(MetricKey::RevenueMultiple, revenue_multiple),
        ],
    })
}
