use turbo_relations::prelude::*;

fn main() -> Result<(), RegistryError> {
	tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

	let mut ctx = RelationContext::new();
	let lawn = ctx.create_container("Front Lawn");
	let patio = ctx.create_container("Patio");

	let basil = ctx.create_member("Basil");
	ctx.assign(basil, Some(&lawn))?;
	let cucumber = ctx.create_member("Cucumber");
	ctx.assign(cucumber, Some(&lawn))?;
	ctx.create_member_in("Lavender", &patio);
	ctx.create_member("Weed");

	for garden in [&lawn, &patio] {
		let plants = garden.members(&ctx).into_iter().map(MemberRecord::name).collect::<Vec<_>>();
		tracing::info!(garden = garden.name(), plants = ?plants, "garden contents");
	}

	let weeds = ctx.unassigned().into_iter().map(MemberRecord::name).collect::<Vec<_>>();
	tracing::info!(plants = ?weeds, "plants without a garden");
	Ok(())
}
