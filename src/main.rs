use valentine::{run_valentine, ValentineConfig};

fn main() -> eframe::Result<()> {
    run_valentine(ValentineConfig::default())
}
