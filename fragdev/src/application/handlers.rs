use frag_core::error::Result;
use frag_core::source_factory::{Backend, open_source};
use frag_core::{FragConfig, LoadedFragments, load_dataset_fragments, plan_fragments, split_dataset};

pub fn handle_split(cfg: &FragConfig) -> Result<()> {
    let written = split_dataset(cfg)?;
    let loaded = load_dataset_fragments(cfg)?;
    print_summary(&loaded, false);
    eprintln!(
        "split: {} fragments of up to {} frames in {}",
        written,
        cfg.fragment_size,
        cfg.fragments_dir().display()
    );
    Ok(())
}

pub fn handle_load(cfg: &FragConfig, long: bool) -> Result<()> {
    let loaded = load_dataset_fragments(cfg)?;
    print_summary(&loaded, long);
    eprintln!(
        "load: {} depth lists, {} color lists",
        loaded.depth_lists.len(),
        loaded.color_lists.len()
    );
    Ok(())
}

pub fn handle_plan(cfg: &FragConfig) -> Result<()> {
    let source = open_source(Backend::Fs, cfg.into())?;
    let frames = source.load_frame_paths()?;
    for f in plan_fragments(frames.len(), cfg.fragment_size)? {
        println!(
            "fragment {:03}  frames [{}, {})  n={}",
            f.id,
            f.start,
            f.end,
            f.len()
        );
    }
    Ok(())
}

fn print_summary(loaded: &LoadedFragments, long: bool) {
    let n = loaded.depth_lists.len().max(loaded.color_lists.len());
    for id in 0..n {
        let depths = loaded.depth_lists.get(id);
        let colors = loaded.color_lists.get(id);
        println!(
            "fragment {:03}  depths={} colors={}",
            id,
            count(depths),
            count(colors)
        );
        if long {
            for p in depths.into_iter().flatten() {
                println!("  d {p}");
            }
            for p in colors.into_iter().flatten() {
                println!("  c {p}");
            }
        }
    }
}

fn count(list: Option<&Vec<String>>) -> String {
    list.map_or_else(|| "-".to_string(), |l| l.len().to_string())
}
