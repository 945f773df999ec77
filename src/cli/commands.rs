//! Subcommand dispatch and handlers.

use std::io;

use clap::CommandFactory;
use generational_arena::Index;
use tracing::{debug, instrument};

use crate::catalog::sample_building;
use crate::cli::args::{Cli, Commands};
use crate::domain::{Inventory, InventoryResult};

pub fn execute_command(cli: &Cli) -> InventoryResult<()> {
    match &cli.command {
        Some(Commands::Show) | None => _show(),
        Some(Commands::Tree) => _tree(),
        Some(Commands::Leaves) => _leaves(),
        Some(Commands::Branches) => _branches(),
        Some(Commands::Info) => _info(),
        Some(Commands::Completion { shell }) => _completion(*shell),
    }
}

/// Demo inventory shared by all subcommands.
fn demo_inventory() -> InventoryResult<(Inventory, Index)> {
    let mut inv = Inventory::new();
    let root = sample_building(&mut inv)?;
    debug!("demo inventory: {} items", inv.len());
    Ok((inv, root))
}

#[instrument]
fn _show() -> InventoryResult<()> {
    let (inv, root) = demo_inventory()?;
    print!("{}", inv.render(root));
    Ok(())
}

#[instrument]
fn _tree() -> InventoryResult<()> {
    let (inv, root) = demo_inventory()?;
    println!("{}", inv.to_tree_string(root));
    Ok(())
}

#[instrument]
fn _leaves() -> InventoryResult<()> {
    let (inv, root) = demo_inventory()?;
    for leaf in inv.leaf_items(root) {
        println!("{}", leaf);
    }
    Ok(())
}

#[instrument]
fn _branches() -> InventoryResult<()> {
    let (inv, root) = demo_inventory()?;
    let branches = inv.branches(root);
    println!("Found {} branches:\n", branches.len());
    for branch in &branches {
        println!("{}", branch);
    }
    Ok(())
}

#[instrument]
fn _info() -> InventoryResult<()> {
    if let Some(author) = Cli::command().get_author() {
        println!("AUTHOR: {}", author);
    }
    if let Some(version) = Cli::command().get_version() {
        println!("VERSION: {}", version);
    }
    let (inv, root) = demo_inventory()?;
    println!("Items: {}", inv.len());
    println!("Leaves: {}", inv.leaf_items(root).len());
    println!("Depth: {}", inv.depth(root));
    Ok(())
}

#[instrument]
fn _completion(shell: clap_complete::Shell) -> InventoryResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
