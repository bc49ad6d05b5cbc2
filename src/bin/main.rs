use netgraph::start_netgraph;

fn main() -> anyhow::Result<()> {
    start_netgraph()
}
