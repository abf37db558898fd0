use bambam_gbfs::app::GbfsCliArguments;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = GbfsCliArguments::parse();
    if let Err(e) = args.op.run() {
        log::error!("bambam_gbfs failed: {e}");
        std::process::exit(1);
    }
    log::debug!("bambam_gbfs finished");
}
