#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ErrorContext {
    Unknown,
    AccessingValue,
    CallingFunction,
    RebindingFunction,
    BuildingList,
    EvaluatingPrelude,
}
