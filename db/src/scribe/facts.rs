//! Editorial facts.
use diesel::prelude::*;
use log::info;

use super::lookup_err;
use crate::clock::Clock;
use crate::models::{GodFact, NewGodFact, STATUS_DRAFT, STATUS_PUBLISHED};
use crate::schema::god_facts;
use crate::{DbConnection, DbError};

/// Which facts [facts] returns.
#[derive(Clone, Debug, Default)]
pub struct FactFilter<'a> {
    pub category: Option<&'a str>,
    /// Include drafts as well as published facts.
    pub include_drafts: bool,
}

/// Adds a fact as a draft.
pub fn add_fact(
    new: &NewGodFact,
    clock: &dyn Clock,
    conn: &mut DbConnection,
) -> Result<GodFact, DbError> {
    let now = clock.now();
    let fact: GodFact = diesel::insert_into(god_facts::table)
        .values((
            new,
            god_facts::status.eq(STATUS_DRAFT),
            god_facts::created_at.eq(now),
            god_facts::updated_at.eq(now),
        ))
        .returning(GodFact::as_returning())
        .get_result(conn)?;

    info!("Added {} fact '{}'", fact.category, fact.title);
    Ok(fact)
}

pub fn fact(fact_id: i32, conn: &mut DbConnection) -> Result<GodFact, DbError> {
    god_facts::table
        .find(fact_id)
        .select(GodFact::as_select())
        .first(conn)
        .map_err(|e| lookup_err(e, || fact_not_found(fact_id)))
}

/// Lists facts, featured ones first and then newest first.
pub fn facts(filter: &FactFilter, conn: &mut DbConnection) -> Result<Vec<GodFact>, DbError> {
    let mut query = god_facts::table
        .select(GodFact::as_select())
        .order((
            god_facts::featured.desc(),
            god_facts::created_at.desc(),
            god_facts::id.desc(),
        ))
        .into_boxed();

    if !filter.include_drafts {
        query = query.filter(god_facts::status.eq(STATUS_PUBLISHED));
    }
    if let Some(category) = filter.category {
        query = query.filter(god_facts::category.eq(category));
    }

    Ok(query.load(conn)?)
}

pub fn publish_fact(
    fact_id: i32,
    clock: &dyn Clock,
    conn: &mut DbConnection,
) -> Result<GodFact, DbError> {
    let fact: GodFact = diesel::update(god_facts::table.find(fact_id))
        .set((
            god_facts::status.eq(STATUS_PUBLISHED),
            god_facts::updated_at.eq(clock.now()),
        ))
        .returning(GodFact::as_returning())
        .get_result(conn)
        .map_err(|e| lookup_err(e, || fact_not_found(fact_id)))?;

    info!("Published fact '{}'", fact.title);
    Ok(fact)
}

pub fn set_featured(
    fact_id: i32,
    featured: bool,
    clock: &dyn Clock,
    conn: &mut DbConnection,
) -> Result<GodFact, DbError> {
    diesel::update(god_facts::table.find(fact_id))
        .set((
            god_facts::featured.eq(featured),
            god_facts::updated_at.eq(clock.now()),
        ))
        .returning(GodFact::as_returning())
        .get_result(conn)
        .map_err(|e| lookup_err(e, || fact_not_found(fact_id)))
}

/// Counts one more view of a fact.
///
/// Unlike [publish_fact] and [set_featured], this leaves `updated_at` alone;
/// that column tracks editorial changes only.
pub fn record_fact_view(fact_id: i32, conn: &mut DbConnection) -> Result<GodFact, DbError> {
    diesel::update(god_facts::table.find(fact_id))
        .set(god_facts::views.eq(god_facts::views + 1))
        .returning(GodFact::as_returning())
        .get_result(conn)
        .map_err(|e| lookup_err(e, || fact_not_found(fact_id)))
}

pub fn delete_fact(fact_id: i32, conn: &mut DbConnection) -> Result<(), DbError> {
    match diesel::delete(god_facts::table.find(fact_id)).execute(conn)? {
        0 => Err(fact_not_found(fact_id)),
        _ => {
            info!("Deleted fact {}", fact_id);
            Ok(())
        }
    }
}

fn fact_not_found(fact_id: i32) -> DbError {
    DbError::NotFound {
        entity: "Fact",
        key: fact_id.to_string(),
    }
}
