use datatest_stable::Utf8Path;
use kundali::bodies::is_ascendant;
use kundali::{AscendantSource, ChartData, RenderOptions, Sign, build_houses, layout, render_chart};

/// Run one chart payload through houses, layout and SVG, checking the
/// invariants that hold for every input.
fn check_chart_fixture(path: &Utf8Path) -> datatest_stable::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let json = std::fs::read_to_string(path)?;
    let data = ChartData::from_json(&json)?;
    let map = build_houses(&data.planets);

    // twelve houses, numbered in order, signs cycling from the Ascendant
    for (i, house) in map.iter().enumerate() {
        if house.number as usize != i + 1 {
            return Err(format!("house {} has number {}", i + 1, house.number).into());
        }
        if house.sign != map.ascendant.sign.offset(i) {
            return Err(format!("house {} has sign {}", house.number, house.sign).into());
        }
    }

    let placed = data
        .planets
        .iter()
        .filter(|p| !is_ascendant(&p.name) && Sign::from_name(&p.sign).is_some())
        .count();
    if map.occupant_count() != placed {
        return Err(format!("{} occupants for {} recognized placements", map.occupant_count(), placed).into());
    }

    if data.planets.is_empty() && map.ascendant.source != AscendantSource::Fallback {
        return Err("empty payload must use the fallback ascendant".into());
    }

    let options = RenderOptions::default();
    let spec = layout(&map.houses, options.size.size(), options.size.margin());
    if spec != layout(&map.houses, options.size.size(), options.size.margin()) {
        return Err("layout is not repeatable".into());
    }

    let svg = render_chart(&data, &options);
    let occupied = map.iter().filter(|h| !h.occupants.is_empty()).count();
    let expected = [("<polygon", 14), ("<line", 2), ("<text", 24 + occupied)];
    for (tag, count) in expected {
        let found = svg.matches(tag).count();
        if found != count {
            return Err(format!("{}: expected {} {} elements, found {}", path, count, tag, found).into());
        }
    }

    Ok(())
}

datatest_stable::harness! {
    { test = check_chart_fixture, root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"), pattern = r"\.json$" },
}
