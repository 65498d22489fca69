// Action tree builder - recursive expansion of acquisition strategies
use crate::config::PlannerConfig;
use crate::data::{GameData, IngredientSpec, Recipe, SmeltInput, parse_tool_item};
use crate::models::{
    ActionNode, ActionStep, CandidateTag, CraftOutput, GoalNode, Ingredient, Inventory, VariantSet,
};
use crate::planner::constraints::{VariantConstraints, WOOD_FAMILY};
use crate::planner::fuel_resolver::FuelResolver;
use crate::planner::tool_selector::ToolSelector;
use crate::planner::world_budget::WorldBudget;
use crate::v_debug;

/// Coarse magnitude bucket for the visited-path guard. Exact counts grow
/// without repeating in mutually recursive recipes, so re-entry is detected
/// per magnitude class instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityClass {
    One,
    Handful,
    Bulk,
}

impl QuantityClass {
    pub fn of(count: u32) -> Self {
        match count {
            0 | 1 => QuantityClass::One,
            2..=8 => QuantityClass::Handful,
            _ => QuantityClass::Bulk,
        }
    }
}

/// Path-local expansion state.
///
/// `virtual_inventory` and `constraints` flow forward through AND-siblings
/// (what an earlier requirement produced or committed to, later ones see);
/// `visited` and `depth` describe the ancestor chain only and reset for
/// siblings. The whole scope is cloned at branch points - no shared
/// mutable state survives a `plan` call.
#[derive(Debug, Clone)]
struct ExpandScope {
    virtual_inventory: Inventory,
    constraints: VariantConstraints,
    visited: Vec<(String, QuantityClass)>,
    depth: u32,
}

impl ExpandScope {
    fn is_open(&self, item: &str, class: QuantityClass) -> bool {
        self.visited
            .iter()
            .any(|(open_item, open_class)| open_item == item && *open_class == class)
    }

    fn descend(&self, item: &str, class: QuantityClass) -> Self {
        let mut child = self.clone();
        child.visited.push((item.to_string(), class));
        child.depth += 1;
        child
    }

    /// Restore ancestor-chain state so this scope describes a sibling at
    /// `reference`'s level while keeping inventory/constraint commitments.
    fn at_level_of(mut self, reference: &ExpandScope) -> Self {
        self.visited = reference.visited.clone();
        self.depth = reference.depth;
        self
    }
}

pub struct TreeBuilder<'a> {
    data: &'a GameData,
    budget: Option<&'a WorldBudget>,
    config: &'a PlannerConfig,
    combine_similar: bool,
    prune_with_world: bool,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(
        data: &'a GameData,
        budget: Option<&'a WorldBudget>,
        config: &'a PlannerConfig,
        combine_similar: bool,
        prune_with_world: bool,
    ) -> Self {
        Self {
            data,
            budget,
            config,
            combine_similar,
            prune_with_world,
        }
    }

    /// Expand `count` of `item` against `inventory` into the full
    /// alternative tree. Zero alternatives on the returned goal means
    /// currently unobtainable, which is a valid result.
    pub fn build(&self, item: &str, count: u32, inventory: &Inventory) -> GoalNode {
        if !self.data.is_known_item(item) {
            v_debug!("❓ Unknown item '{}' for game {}", item, self.data.version());
            return GoalNode::unobtainable(item, count);
        }

        let scope = ExpandScope {
            virtual_inventory: inventory.clone(),
            constraints: VariantConstraints::new(self.config.wood.generic_enabled),
            visited: Vec::new(),
            depth: 0,
        };
        let (goal, _) = self.build_goal(item, count, scope);
        goal
    }

    /// Durable things (stations, tools) are reusable: requesting one never
    /// consumes it from the path-local inventory.
    fn is_durable(&self, item: &str) -> bool {
        self.data.is_persistent(item) || parse_tool_item(item).is_some()
    }

    /// Core recursion. Returns the goal plus the scope a following sibling
    /// should continue from (consumption and surplus applied).
    fn build_goal(&self, item: &str, count: u32, mut scope: ExpandScope) -> (GoalNode, ExpandScope) {
        let durable = self.is_durable(item);
        let available = scope.virtual_inventory.count(item);

        if available >= count {
            if !durable {
                scope.virtual_inventory.remove_up_to(item, count);
            }
            return (GoalNode::satisfied(item, count), scope);
        }

        if !durable {
            scope.virtual_inventory.remove_up_to(item, available);
        }
        let needed = count - available;
        let class = QuantityClass::of(needed);

        if scope.depth >= self.config.search.max_depth || scope.is_open(item, class) {
            // Re-entering an open expansion (or running out of depth) omits
            // this branch; a non-circular sibling route may still exist.
            return (GoalNode::unobtainable(item, needed), scope);
        }

        let child_scope = scope.descend(item, class);
        let mut alternatives: Vec<ActionNode> = Vec::new();
        let mut committed_scope: Option<ExpandScope> = None;
        let mut adopt = |result: Option<(ActionNode, ExpandScope)>,
                         alternatives: &mut Vec<ActionNode>,
                         committed: &mut Option<ExpandScope>| {
            if let Some((node, out_scope)) = result {
                alternatives.push(node);
                if committed.is_none() {
                    *committed = Some(out_scope);
                }
            }
        };

        for recipe in self.data.recipes_for(item) {
            adopt(
                self.expand_craft(item, needed, recipe, child_scope.clone()),
                &mut alternatives,
                &mut committed_scope,
            );
        }
        for input in self.data.smelt_inputs_for(item) {
            adopt(
                self.expand_smelt(item, needed, input, child_scope.clone()),
                &mut alternatives,
                &mut committed_scope,
            );
        }
        adopt(
            self.expand_mine(item, needed, child_scope.clone()),
            &mut alternatives,
            &mut committed_scope,
        );
        adopt(
            self.expand_hunt(item, needed, child_scope),
            &mut alternatives,
            &mut committed_scope,
        );

        match committed_scope {
            Some(out_scope) if !alternatives.is_empty() => {
                // The first successful method is the canonical route; its
                // inventory and constraint commitments are what later
                // siblings observe.
                let out_scope = out_scope.at_level_of(&scope);
                (
                    GoalNode::with_alternatives(item, needed, alternatives),
                    out_scope,
                )
            }
            _ => (GoalNode::unobtainable(item, needed), scope),
        }
    }

    fn expand_craft(
        &self,
        item: &str,
        needed: u32,
        recipe: &Recipe,
        mut scope: ExpandScope,
    ) -> Option<(ActionNode, ExpandScope)> {
        let crafts = needed.div_ceil(recipe.result_count);
        let mut requirements: Vec<GoalNode> = Vec::new();
        let mut step_ingredients: Vec<Ingredient> = Vec::new();

        for recipe_ingredient in &recipe.ingredients {
            let amount = crafts * recipe_ingredient.count;
            match &recipe_ingredient.spec {
                IngredientSpec::Item(name) => {
                    let (goal, next_scope) = self.build_goal(name, amount, scope);
                    if !goal.is_obtainable() {
                        return None;
                    }
                    scope = next_scope;
                    requirements.push(goal);
                    step_ingredients.push(Ingredient {
                        item: VariantSet::single(name.clone()),
                        per_craft: recipe_ingredient.count,
                    });
                }
                IngredientSpec::WoodFamily(suffix) => {
                    let (members, goal, next_scope) =
                        self.build_family_requirement(suffix, amount, scope)?;
                    if !goal.is_obtainable() {
                        return None;
                    }
                    scope = next_scope;
                    requirements.push(goal);
                    step_ingredients.push(Ingredient {
                        item: members,
                        per_craft: recipe_ingredient.count,
                    });
                }
            }
        }

        if recipe.requires_station {
            let (station_goal, next_scope) = self.build_goal("crafting_table", 1, scope);
            if !station_goal.is_obtainable() {
                return None;
            }
            scope = next_scope;
            requirements.push(station_goal);
        }

        // Yield credit: what this craft run produces beyond the request
        // stays visible to later siblings on the same path
        scope
            .virtual_inventory
            .add(item, crafts * recipe.result_count);
        if !self.is_durable(item) {
            scope.virtual_inventory.remove_up_to(item, needed);
        }

        let step = ActionStep::Craft {
            what: VariantSet::single(item.to_string()),
            count: crafts,
            ingredients: step_ingredients,
            result: CraftOutput {
                item: VariantSet::single(item.to_string()),
                per_craft: recipe.result_count,
            },
            requires_station: recipe.requires_station,
        };
        Some((ActionNode::new(step, requirements), scope))
    }

    fn expand_smelt(
        &self,
        item: &str,
        needed: u32,
        input: &SmeltInput,
        mut scope: ExpandScope,
    ) -> Option<(ActionNode, ExpandScope)> {
        let mut requirements: Vec<GoalNode> = Vec::new();

        let input_set = match input {
            SmeltInput::Item(name) => {
                let (goal, next_scope) = self.build_goal(name, needed, scope);
                if !goal.is_obtainable() {
                    return None;
                }
                scope = next_scope;
                requirements.push(goal);
                VariantSet::single(name.clone())
            }
            SmeltInput::WoodFamily(suffix) => {
                let (members, goal, next_scope) =
                    self.build_family_requirement(suffix, needed, scope)?;
                if !goal.is_obtainable() {
                    return None;
                }
                scope = next_scope;
                requirements.push(goal);
                members
            }
        };

        // Fuel is always an explicit sibling requirement, never assumed
        let fuel_resolver = FuelResolver::new(&self.config.fuel);
        let fuel_requirement = fuel_resolver.resolve(needed, &scope.virtual_inventory);
        let (fuel_goal, next_scope) = self.build_goal(
            &fuel_requirement.chosen,
            fuel_requirement.units_needed,
            scope,
        );
        if !fuel_goal.is_obtainable() {
            return None;
        }
        scope = next_scope;
        requirements.push(fuel_goal);

        let (furnace_goal, next_scope) = self.build_goal("furnace", 1, scope);
        if !furnace_goal.is_obtainable() {
            return None;
        }
        scope = next_scope;
        requirements.push(furnace_goal);

        let step = ActionStep::Smelt {
            what: item.to_string(),
            count: needed,
            input: input_set,
            fuel: fuel_requirement.fuel,
            result: item.to_string(),
        };
        Some((ActionNode::new(step, requirements), scope))
    }

    fn expand_mine(
        &self,
        item: &str,
        needed: u32,
        mut scope: ExpandScope,
    ) -> Option<(ActionNode, ExpandScope)> {
        let all_blocks = self.data.blocks_dropping(item);
        if all_blocks.is_empty() {
            return None;
        }

        let mut blocks: Vec<String> = all_blocks.to_vec();
        let mut tag = None;
        if self.prune_with_world {
            if let Some(budget) = self.budget {
                blocks.retain(|block| budget.is_block_available(block));
                if blocks.is_empty() {
                    v_debug!("🌍 No source block for {} within range", item);
                    return None;
                }
                tag = Some(CandidateTag::WorldPruned);
            }
        }
        if let Some(budget) = self.budget {
            budget.rank_blocks(&mut blocks);
        }

        let selector = ToolSelector::new(self.data, &self.config.tools);
        let choice = selector.select(&blocks[0], &scope.virtual_inventory)?;

        let mut requirements: Vec<GoalNode> = Vec::new();
        if let Some(acquire) = &choice.acquire {
            let (tool_goal, next_scope) = self.build_goal(acquire, 1, scope);
            if !tool_goal.is_obtainable() {
                return None;
            }
            scope = next_scope;
            requirements.push(tool_goal);
        }

        if self.is_durable(item) {
            scope.virtual_inventory.add(item, needed);
        }
        let step = ActionStep::Mine {
            what: VariantSet::from_values(blocks, tag)?,
            target_item: VariantSet::single(item.to_string()),
            count: needed,
            tool: choice.tool,
        };
        Some((ActionNode::new(step, requirements), scope))
    }

    fn expand_hunt(
        &self,
        item: &str,
        needed: u32,
        mut scope: ExpandScope,
    ) -> Option<(ActionNode, ExpandScope)> {
        let all_creatures = self.data.creatures_dropping(item);
        if all_creatures.is_empty() {
            return None;
        }

        let mut creatures: Vec<String> = all_creatures.to_vec();
        let mut tag = None;
        if self.prune_with_world {
            if let Some(budget) = self.budget {
                creatures.retain(|creature| budget.is_entity_available(creature));
                if creatures.is_empty() {
                    v_debug!("🌍 No source creature for {} within range", item);
                    return None;
                }
                tag = Some(CandidateTag::WorldPruned);
            }
        }
        if let Some(budget) = self.budget {
            budget.rank_entities(&mut creatures);
        }

        if self.is_durable(item) {
            scope.virtual_inventory.add(item, needed);
        }
        let step = ActionStep::Hunt {
            what: VariantSet::from_values(creatures, tag)?,
            target_item: item.to_string(),
            count: needed,
        };
        Some((ActionNode::new(step, Vec::new()), scope))
    }

    /// Candidate species for a wood family, availability- and
    /// constraint-filtered, nearest-first when a budget exists.
    fn family_candidates(&self, suffix: &str, scope: &ExpandScope) -> (Vec<String>, bool) {
        let mut filtered = false;
        let mut species: Vec<String> = self
            .data
            .wood_species()
            .iter()
            .filter(|sp| {
                let member = self.data.family_member(sp, suffix);
                if scope.virtual_inventory.count(&member) > 0 {
                    return true;
                }
                if self.prune_with_world {
                    if let Some(budget) = self.budget {
                        let log_block = self.data.family_member(sp, "log");
                        if !budget.is_block_available(&log_block) {
                            filtered = true;
                            return false;
                        }
                    }
                }
                true
            })
            .cloned()
            .collect();

        if let Some(budget) = self.budget {
            species.sort_by(|a, b| {
                let da = budget.closest_block_distance(&self.data.family_member(a, "log"));
                let db = budget.closest_block_distance(&self.data.family_member(b, "log"));
                da.total_cmp(&db)
                    .then_with(|| {
                        budget
                            .block_count(&self.data.family_member(b, "log"))
                            .cmp(&budget.block_count(&self.data.family_member(a, "log")))
                    })
                    .then_with(|| a.cmp(b))
            });
        }

        (scope.constraints.propose(WOOD_FAMILY, species), filtered)
    }

    fn family_tag(&self, filtered: bool, pinned: bool) -> CandidateTag {
        if pinned {
            CandidateTag::SpeciesSpecific
        } else if filtered {
            CandidateTag::WorldPruned
        } else {
            CandidateTag::Generic
        }
    }

    /// Build the requirement for `amount` of a wood family ("planks",
    /// "log"). Returns the member variant set for the consuming step, the
    /// requirement goal, and the scope following siblings continue from.
    fn build_family_requirement(
        &self,
        suffix: &str,
        amount: u32,
        mut scope: ExpandScope,
    ) -> Option<(VariantSet<String>, GoalNode, ExpandScope)> {
        let (candidates, filtered) = self.family_candidates(suffix, &scope);
        if candidates.is_empty() {
            return None;
        }
        let pinned = scope.constraints.pinned(WOOD_FAMILY).is_some();

        // Any-species inventory counts toward the family total
        let mut remaining = amount;
        let mut holders: Vec<(String, u32)> = Vec::new();
        for sp in &candidates {
            let member = self.data.family_member(sp, suffix);
            let have = scope.virtual_inventory.count(&member);
            if have > 0 && remaining > 0 {
                let take = have.min(remaining);
                holders.push((member, take));
                remaining -= take;
            }
        }
        for (member, take) in &holders {
            scope.virtual_inventory.remove_up_to(member, *take);
        }

        let tag = self.family_tag(filtered, pinned);
        let members = VariantSet::from_values(
            candidates
                .iter()
                .map(|sp| self.data.family_member(sp, suffix)),
            Some(tag),
        )?;

        if remaining == 0 {
            let goal = GoalNode::satisfied(suffix, amount);
            return Some((members, goal, scope));
        }

        if !scope.constraints.generic_enabled() && !pinned {
            // Forced concrete resolution: commit to the best candidate for
            // the remainder of the plan
            let species = candidates[0].clone();
            scope.constraints.pin(WOOD_FAMILY, &species);
            let member = self.data.family_member(&species, suffix);
            let (goal, next_scope) = self.build_goal(&member, remaining, scope);
            if !goal.is_obtainable() {
                return None;
            }
            let members = VariantSet::tagged(member, CandidateTag::SpeciesSpecific);
            return Some((members, goal, next_scope));
        }

        if candidates.len() == 1 {
            let member = self.data.family_member(&candidates[0], suffix);
            let (goal, next_scope) = self.build_goal(&member, remaining, scope);
            if !goal.is_obtainable() {
                return None;
            }
            return Some((members, goal, next_scope));
        }

        if self.combine_similar {
            let (goal, next_scope) =
                self.build_merged_family_goal(suffix, remaining, &candidates, tag, scope)?;
            return Some((members, goal, next_scope));
        }

        // One alternative per species route, all under a single family goal
        let mut alternatives: Vec<ActionNode> = Vec::new();
        let mut committed_scope: Option<ExpandScope> = None;
        for sp in &candidates {
            let member = self.data.family_member(sp, suffix);
            let (goal, member_scope) = self.build_goal(&member, remaining, scope.clone());
            if goal.is_obtainable() {
                if committed_scope.is_none() {
                    committed_scope = Some(member_scope);
                }
                alternatives.extend(goal.alternatives);
            }
        }
        if alternatives.is_empty() {
            return None;
        }
        let goal = GoalNode::with_alternatives(suffix, remaining, alternatives);
        Some((members, goal, committed_scope?))
    }

    /// One merged node per method instead of one node per species: the step
    /// carries multi-candidate variant sets, keeping tree size independent
    /// of how many species are in play.
    fn build_merged_family_goal(
        &self,
        suffix: &str,
        needed: u32,
        candidates: &[String],
        tag: CandidateTag,
        scope: ExpandScope,
    ) -> Option<(GoalNode, ExpandScope)> {
        let class = QuantityClass::of(needed);
        if scope.depth >= self.config.search.max_depth || scope.is_open(suffix, class) {
            return None;
        }
        let child_scope = scope.descend(suffix, class);

        let members = VariantSet::from_values(
            candidates
                .iter()
                .map(|sp| self.data.family_member(sp, suffix)),
            Some(tag),
        )?;

        let mut alternatives: Vec<ActionNode> = Vec::new();
        let mut committed_scope: Option<ExpandScope> = None;

        // Craft route: template from the first member, generalized across
        // the candidate set (family recipes share their shape by table
        // construction)
        let template_member = self.data.family_member(&candidates[0], suffix);
        for recipe in self.data.recipes_for(&template_member) {
            if let Some((node, out_scope)) = self.expand_merged_craft(
                suffix,
                needed,
                candidates,
                &members,
                recipe,
                child_scope.clone(),
            ) {
                alternatives.push(node);
                if committed_scope.is_none() {
                    committed_scope = Some(out_scope);
                }
            }
        }

        // Mine route: merged block candidates
        if let Some((node, out_scope)) =
            self.expand_merged_mine(needed, candidates, suffix, tag, &members, child_scope)
        {
            alternatives.push(node);
            if committed_scope.is_none() {
                committed_scope = Some(out_scope);
            }
        }

        if alternatives.is_empty() {
            return None;
        }
        let out_scope = committed_scope?.at_level_of(&scope);
        Some((
            GoalNode::with_alternatives(suffix, needed, alternatives),
            out_scope,
        ))
    }

    fn expand_merged_craft(
        &self,
        suffix: &str,
        needed: u32,
        candidates: &[String],
        members: &VariantSet<String>,
        template: &Recipe,
        mut scope: ExpandScope,
    ) -> Option<(ActionNode, ExpandScope)> {
        let crafts = needed.div_ceil(template.result_count);
        let mut requirements: Vec<GoalNode> = Vec::new();
        let mut step_ingredients: Vec<Ingredient> = Vec::new();
        let first_species = candidates[0].as_str();

        for recipe_ingredient in &template.ingredients {
            let amount = crafts * recipe_ingredient.count;
            let family_suffix = match &recipe_ingredient.spec {
                // A species-qualified slot generalizes across the candidate
                // set ("oak_log" becomes any candidate's log)
                IngredientSpec::Item(name) => match self.data.species_of(name) {
                    Some((species, sub_suffix)) if species == first_species => {
                        Some(sub_suffix.to_string())
                    }
                    _ => None,
                },
                IngredientSpec::WoodFamily(sub_suffix) => Some(sub_suffix.clone()),
            };

            match family_suffix {
                Some(sub_suffix) => {
                    let (sub_members, goal, next_scope) =
                        self.build_family_requirement(&sub_suffix, amount, scope)?;
                    if !goal.is_obtainable() {
                        return None;
                    }
                    scope = next_scope;
                    requirements.push(goal);
                    step_ingredients.push(Ingredient {
                        item: sub_members,
                        per_craft: recipe_ingredient.count,
                    });
                }
                None => {
                    let name = match &recipe_ingredient.spec {
                        IngredientSpec::Item(name) => name.clone(),
                        IngredientSpec::WoodFamily(_) => unreachable!("family handled above"),
                    };
                    let (goal, next_scope) = self.build_goal(&name, amount, scope);
                    if !goal.is_obtainable() {
                        return None;
                    }
                    scope = next_scope;
                    requirements.push(goal);
                    step_ingredients.push(Ingredient {
                        item: VariantSet::single(name),
                        per_craft: recipe_ingredient.count,
                    });
                }
            }
        }

        if template.requires_station {
            let (station_goal, next_scope) = self.build_goal("crafting_table", 1, scope);
            if !station_goal.is_obtainable() {
                return None;
            }
            scope = next_scope;
            requirements.push(station_goal);
        }

        // Surplus credit lands on the first candidate member; family
        // requests count inventory across all members, so the bookkeeping
        // species does not matter
        let produced = crafts * template.result_count;
        let first_member = self.data.family_member(first_species, suffix);
        scope.virtual_inventory.add(&first_member, produced);
        scope.virtual_inventory.remove_up_to(&first_member, needed);

        let step = ActionStep::Craft {
            what: members.clone(),
            count: crafts,
            ingredients: step_ingredients,
            result: CraftOutput {
                item: members.clone(),
                per_craft: template.result_count,
            },
            requires_station: template.requires_station,
        };
        Some((ActionNode::new(step, requirements), scope))
    }

    fn expand_merged_mine(
        &self,
        needed: u32,
        candidates: &[String],
        suffix: &str,
        tag: CandidateTag,
        members: &VariantSet<String>,
        mut scope: ExpandScope,
    ) -> Option<(ActionNode, ExpandScope)> {
        // A merged mine needs every candidate member to be a block drop
        // (true for logs); families without a mine route fall out here
        let mut blocks: Vec<String> = Vec::new();
        for sp in candidates {
            let member = self.data.family_member(sp, suffix);
            let drops = self.data.blocks_dropping(&member);
            if drops.is_empty() {
                return None;
            }
            blocks.extend(drops.iter().cloned());
        }
        if self.prune_with_world {
            if let Some(budget) = self.budget {
                blocks.retain(|block| budget.is_block_available(block));
                if blocks.is_empty() {
                    return None;
                }
            }
        }
        if let Some(budget) = self.budget {
            budget.rank_blocks(&mut blocks);
        }

        let selector = ToolSelector::new(self.data, &self.config.tools);
        let choice = selector.select(&blocks[0], &scope.virtual_inventory)?;

        let mut requirements: Vec<GoalNode> = Vec::new();
        if let Some(acquire) = &choice.acquire {
            let (tool_goal, next_scope) = self.build_goal(acquire, 1, scope);
            if !tool_goal.is_obtainable() {
                return None;
            }
            scope = next_scope;
            requirements.push(tool_goal);
        }

        let step = ActionStep::Mine {
            what: VariantSet::from_values(blocks, Some(tag))?,
            target_item: members.clone(),
            count: needed,
            tool: choice.tool,
        };
        Some((ActionNode::new(step, requirements), scope))
    }
}
