use enum_field::prelude::*;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Clone, Default, Deserialize)]
struct Swatch {
    hex: String,
}

#[derive(Debug, Clone, Default)]
struct Shade;

enum_field::enumeration! {
    Shade {
        LIGHT,
        DARK(id = 10),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // 运行期注册表：选项来自配置文件式的 JSON
    let table = AccessorTable::<Swatch>::new();
    let mut palette = Registry::<Swatch>::for_host::<Swatch>()
        .with_factory(DefaultFactory)
        .with_sink(table.clone());
    palette.define_value("RED", &json!({"object": {"hex": "#ff0000"}}))?;
    palette.define_value("ACCENT", &json!({"object": {"hex": "#ff8800"}, "id": 7, "seal": false}))?;
    palette.define("BLANK", DefineOptions::new())?;

    if let Err(e) = palette.define_value("RED", &json!({})) {
        tracing::info!(error = %e, "duplicate rejected as expected");
    }

    let accent = palette.find(7)?;
    accent.update(|s| s.hex = "#ffaa00".into())?;
    for m in palette.iter() {
        println!("{:>3} {:<8} {}", m.id(), m.name(), m.with(|s| s.hex.clone()));
    }
    if let Some(red) = table.get("RED") {
        println!("accessor RED -> id {}", red.id());
    }

    println!("{} -> {:?}", Shade::DARK().name(), Shade::find(10)?.id());
    for host in enum_field::catalog::all() {
        println!("{}: {:?}", (host.type_name)(), (host.names)());
    }
    Ok(())
}
