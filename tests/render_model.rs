//! End-to-end render-model builds from JSON molecules and TOML presets.

use glam::Vec3;
use ligview::analysis::{find_hbond_pairs, HBondCandidate, MAX_DASHES_PER_LINE};
use ligview::element::{ElementLookup, ElementTable};
use ligview::layout::{layout_bond, surface_trim, AtomShape, BondEndpoint};
use ligview::model::{Atom, Molecule};
use ligview::options::{GeometryOptions, Options, OverlayMode, RenderStyle};
use ligview::scene::instance::{atom_instances, capsule_instances};
use ligview::scene::{Overlay, RenderModel};

const ACETAMIDE: &str = include_str!("../demos/acetamide.json");
const CUBE_EXPOSURE_PRESET: &str = include_str!("../demos/preset_cube_exposure.toml");

fn acetamide() -> Molecule {
    Molecule::from_json(ACETAMIDE).unwrap()
}

fn build(molecule: &Molecule, options: &Options) -> RenderModel {
    let elements = ElementTable::with_color_overrides(&options.colors);
    RenderModel::build(molecule, options, &elements)
}

#[test]
fn acetamide_sphere_style() {
    let molecule = acetamide();
    let model = build(&molecule, &Options::default());

    assert_eq!(model.atoms.len(), 9);
    // Seven single bonds and one double bond, each strand split in two
    assert_eq!(model.strands.len(), 7 * 2 + 2 * 2);
    assert!(model
        .strands
        .iter()
        .all(|s| s.start.is_finite() && s.end.is_finite() && s.radius > 0.0));
}

#[test]
fn switching_style_rebuilds_from_scratch() {
    let molecule = acetamide();
    let mut options = Options::default();
    let sphere = build(&molecule, &options);

    options.display.style = RenderStyle::SpaceFilling;
    let filled = build(&molecule, &options);
    assert!(filled.strands.is_empty());
    assert!(filled
        .atoms
        .iter()
        .zip(&sphere.atoms)
        .all(|(f, s)| f.radius > s.radius));

    options.display.style = RenderStyle::Sphere;
    assert_eq!(build(&molecule, &options), sphere);
}

#[test]
fn hbond_overlay_finds_amide_pair() {
    let molecule = acetamide();
    let mut options = Options::default();
    options.display.overlay = OverlayMode::HBonds;
    let model = build(&molecule, &options);

    assert_eq!(
        model.overlay,
        Overlay::HBonds(vec![
            HBondCandidate { donor: 2, acceptor: 3 },
            HBondCandidate { donor: 3, acceptor: 2 },
        ])
    );
    assert!(!model.hbond_dashes(&options.analysis).is_empty());
}

#[test]
fn preset_drives_style_overlay_and_colors() {
    let options = Options::from_toml(CUBE_EXPOSURE_PRESET).unwrap();
    let molecule = acetamide();
    let model = build(&molecule, &options);

    assert_eq!(model.style, RenderStyle::Cube);
    assert!(model.atoms.iter().all(|a| a.shape == AtomShape::Cube));
    assert!((model.atoms[0].radius - 0.35).abs() < 1e-6);
    assert_eq!(model.atoms[0].color, [0.3, 0.3, 0.3]);

    let Overlay::Exposure(scores) = &model.overlay else {
        panic!("expected exposure overlay, got {:?}", model.overlay);
    };
    assert_eq!(scores.len(), 9);
    assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
    assert!(scores.contains(&0.0));
    assert!(scores.contains(&1.0));

    let instances = atom_instances(&model);
    assert_eq!(instances.len(), 9);
    let elements = ElementTable::with_color_overrides(&options.colors);
    let capsules = capsule_instances(&model, &elements, &options.colors);
    assert_eq!(capsules.len(), model.strands.len());
}

#[test]
fn carbon_oxygen_single_bond_stays_between_trimmed_surfaces() {
    let table = ElementTable::default();
    let geometry = GeometryOptions::default();
    let a = Atom::new("C", Vec3::ZERO);
    let b = Atom::new("O", Vec3::new(1.5, 0.0, 0.0));
    let radius = |atom: &Atom| {
        geometry.base_atom_radius * table.scale(&atom.symbol).unwrap_or(1.0)
    };
    let (ra, rb) = (radius(&a), radius(&b));

    let segments = layout_bond(
        1,
        &BondEndpoint { center: a.position, radius: ra, material_key: "C" },
        &BondEndpoint { center: b.position, radius: rb, material_key: "O" },
        RenderStyle::Sphere,
        &geometry,
    );

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].material_key_start, "C");
    assert_eq!(segments[1].material_key_start, "O");

    let lo = surface_trim(AtomShape::Sphere, ra, Vec3::X, geometry.surface_trim);
    let hi = 1.5 - surface_trim(AtomShape::Sphere, rb, Vec3::X, geometry.surface_trim);
    for seg in &segments {
        for x in [seg.start.x, seg.end.x] {
            assert!(x >= lo - 1e-5 && x <= hi + 1e-5, "{x} outside [{lo}, {hi}]");
        }
    }
}

#[test]
fn nitrogen_reaches_oxygen_but_not_carbon() {
    let atoms = vec![
        Atom::new("N", Vec3::ZERO),
        Atom::new("C", Vec3::new(1.0, 0.0, 0.0)),
        Atom::new("O", Vec3::new(2.0, 0.0, 0.0)),
    ];
    let pairs = find_hbond_pairs(&atoms, 3.2);
    assert!(pairs.contains(&HBondCandidate { donor: 0, acceptor: 2 }));
    assert!(!pairs.contains(&HBondCandidate { donor: 0, acceptor: 1 }));
}

#[test]
fn degenerate_dash_preset_still_terminates() {
    let options = Options::from_toml(
        "[display]\noverlay = \"h_bonds\"\n[analysis]\nhbond_dash_length = 1e-9\nhbond_dash_gap = 0.0\n",
    )
    .unwrap();
    assert!(options.analysis.hbond_dash_length < 1e-6);

    let model = build(&acetamide(), &options);
    let dashes = model.hbond_dashes(&options.analysis);
    assert!(!dashes.is_empty());
    assert!(dashes.len() <= 2 * MAX_DASHES_PER_LINE);
}

#[test]
fn malformed_json_is_rejected() {
    assert!(Molecule::from_json("{\"atoms\": [{\"symbol\": \"C\"}]}").is_err());
    assert!(Molecule::from_json("not json").is_err());
}
