use std::time::Duration;

use criterion::{Criterion, Throughput};
use mag_seed::prelude::MeshGeometry;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
// Each iteration sweeps a full grid, so give the estimator a wider window.
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(3);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

pub fn cells_throughput(mesh: &MeshGeometry) -> Throughput {
    elements_throughput(mesh.cell_count())
}
