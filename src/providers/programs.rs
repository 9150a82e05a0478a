//! Card services program lookups and dropdowns.

use super::TestCase;

/// Program id for each program lookup.
pub fn get_positive() -> Vec<TestCase<i64>> {
    vec![
        TestCase::new("CSPProgramCardholderdrp_Get_Positive", 1),
        TestCase::new("CSPProgramDymInfo_Get_Positive", 1),
        TestCase::new("CSPProgramComponent_Get_Positive", 1),
    ]
}

/// Dropdown lookups that take no arguments.
pub fn dropdowns() -> Vec<TestCase<()>> {
    vec![
        TestCase::new("Positive_Data_HotStampdrp_Get_ById_13", ()),
        TestCase::new("Positive_Data_TippingModuleDrp_Get_ById", ()),
    ]
}
