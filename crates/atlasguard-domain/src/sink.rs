use atlasguard_types::Finding;

/// Receives findings as the aspect emits them.
///
/// Emission is the only output of a visit; the sink decides how findings are stored or shown.
pub trait DiagnosticSink {
    fn emit(&mut self, finding: Finding);
}

impl DiagnosticSink for Vec<Finding> {
    fn emit(&mut self, finding: Finding) {
        self.push(finding);
    }
}
