use crate::PairedRouteSolver;

pub struct AppState {
    pub solver: PairedRouteSolver,
}
