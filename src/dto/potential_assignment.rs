///
/// Precomputed relation stating that a translator may act on a job.
///
/// Only assignments resolved to a particular translator
/// ([`JobVisibility::SpecificToTranslator`]) with an
/// [`Assignability::Acceptable`] outcome make the translator a push
/// recipient for that job.
///
#[derive(Debug, Clone)]
pub struct PotentialAssignment {
    pub job_id: i64,
    pub visibility: JobVisibility,
    pub outcome: Assignability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobVisibility {
    OpenToAll,
    SpecificToTranslator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignability {
    Acceptable,
    NotAcceptable,
}
