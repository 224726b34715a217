use glam::DVec3;
use mag_seed::prelude::*;
use mag_seed_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mesh = MeshGeometry::new([128, 128, 1], DVec3::new(2e-9, 2e-9, 1e-9));
    mesh.validate()?;

    let neel = NeelSkyrmion::new(&mesh, 1, 1);
    let bloch = BlochSkyrmion::new(&mesh, 1, 1);

    // Radial profile through the core: Neel carries the in-plane part on
    // mx (radial), Bloch on my (azimuthal); mz is shared.
    println!(
        "{:>8} {:>10} {:>10} {:>10} {:>10}",
        "x [nm]", "neel mx", "bloch my", "mz", "|m|"
    );
    for i in 0..24 {
        let p = DVec3::new(f64::from(i) * 2e-9, 0.0, 0.0);
        let (n, b) = (neel.at(p), bloch.at(p));
        println!(
            "{:>8.1} {:>10.6} {:>10.6} {:>10.6} {:>10.6}",
            p.x * 1e9,
            n.x,
            b.y,
            n.z,
            n.length()
        );
    }

    let state = sample(&neel, &mesh)?;
    let store = LocalStore::new("target/examples/textures-skyrmion-profiles");
    save_ovf2_text(&store, "neel.ovf", &mesh, &state, &OvfMeta::magnetization())?;

    Ok(())
}
