//! Reservation Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Estacionamento, Reserva, ReservaCreate};
use crate::query::ReservaFilter;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "reserva";

#[derive(Clone)]
pub struct ReservaRepository {
    base: BaseRepository,
}

impl ReservaRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all reservations, in store return order
    pub async fn find_all(&self) -> RepoResult<Vec<Reserva>> {
        let reservas: Vec<Reserva> = self
            .base
            .db()
            .query("SELECT * FROM reserva")
            .await?
            .take(0)?;
        Ok(reservas)
    }

    /// Find reservations matching the filter.
    ///
    /// The name half is pushed down into the store query; the month half runs
    /// as the pure predicate, since the canonical `dd/mm/yyyy` text form does
    /// not range-compare lexically.
    pub async fn find_filtered(&self, filter: &ReservaFilter) -> RepoResult<Vec<Reserva>> {
        let mut sql = String::from("SELECT * FROM reserva");
        if filter.nome.is_some() {
            sql.push_str(" WHERE string::contains(string::lowercase(nome_hospede), $nome)");
        }

        let mut result = match &filter.nome {
            Some(nome) => {
                self.base
                    .db()
                    .query(sql.as_str())
                    .bind(("nome", nome.to_lowercase()))
                    .await?
            }
            None => self.base.db().query(sql.as_str()).await?,
        };
        let reservas: Vec<Reserva> = result.take(0)?;
        Ok(reservas
            .into_iter()
            .filter(|reserva| filter.matches(reserva))
            .collect())
    }

    /// Find reservation by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Reserva>> {
        let thing = record_id(id)?;
        let reserva: Option<Reserva> = self.base.db().select(thing).await?;
        Ok(reserva)
    }

    /// Create a new reservation
    pub async fn create(&self, data: ReservaCreate) -> RepoResult<Reserva> {
        // Invariants enforced at the store boundary regardless of caller
        if data.data_checkin > data.data_checkout {
            return Err(RepoError::Validation(
                "data_checkin must not be after data_checkout".to_string(),
            ));
        }
        if let Estacionamento::Com {
            entrada: Some(entrada),
            saida: Some(saida),
        } = &data.estacionamento
            && entrada > saida
        {
            return Err(RepoError::Validation(
                "entradaCar must not be after saidaCar".to_string(),
            ));
        }

        let created: Option<Reserva> = self
            .base
            .db()
            .create(TABLE)
            .content(Reserva::from(data))
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create reservation".to_string()))
    }

    /// Hard delete a reservation; returns whether the record existed
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = record_id(id)?;
        let deleted: Option<Reserva> = self.base.db().delete(thing).await?;
        Ok(deleted.is_some())
    }
}

/// Accept both the full "reserva:key" form and the bare key
fn record_id(id: &str) -> RepoResult<RecordId> {
    if id.contains(':') {
        id.parse()
            .map_err(|_| RepoError::Validation(format!("Invalid reservation id: {id}")))
    } else {
        Ok(RecordId::from_table_key(TABLE, id))
    }
}
