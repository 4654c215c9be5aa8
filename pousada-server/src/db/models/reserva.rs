//! Reservation model
//!
//! Wire field names are the legacy Portuguese contract the UI speaks
//! (`nome_hospede`, `data_checkin`, `valorReserva`, ...). Internally dates
//! are calendar dates, the value is a [`Money`], and the parking fields fold
//! into the [`Estacionamento`] sum type so "parking not included but entry
//! date recorded" is unrepresentable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::money::Money;
use super::serde_helpers;
use crate::utils::date;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Parking stay. Dates exist only when parking is included; either date may
/// still be unknown at booking time and renders as `N/A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Estacionamento {
    Sem,
    Com {
        entrada: Option<NaiveDate>,
        saida: Option<NaiveDate>,
    },
}

impl Estacionamento {
    pub fn incluido(&self) -> bool {
        matches!(self, Estacionamento::Com { .. })
    }

    pub fn entrada(&self) -> Option<NaiveDate> {
        match self {
            Estacionamento::Com { entrada, .. } => *entrada,
            Estacionamento::Sem => None,
        }
    }

    pub fn saida(&self) -> Option<NaiveDate> {
        match self {
            Estacionamento::Com { saida, .. } => *saida,
            Estacionamento::Sem => None,
        }
    }
}

// Wire projection: the legacy flat fields. `Sem` emits only
// `estacionamento: false`; the date keys stay absent.
impl Serialize for Estacionamento {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = s.serialize_map(None)?;
        match self {
            Estacionamento::Sem => {
                map.serialize_entry("estacionamento", &false)?;
            }
            Estacionamento::Com { entrada, saida } => {
                map.serialize_entry("estacionamento", &true)?;
                map.serialize_entry("entradaCar", &entrada.map(date::format))?;
                map.serialize_entry("saidaCar", &saida.map(date::format))?;
            }
        }
        map.end()
    }
}

#[derive(Deserialize)]
struct EstacionamentoWire {
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    estacionamento: bool,
    #[serde(
        default,
        rename = "entradaCar",
        deserialize_with = "date::option_as_ddmmyyyy::deserialize"
    )]
    entrada: Option<NaiveDate>,
    #[serde(
        default,
        rename = "saidaCar",
        deserialize_with = "date::option_as_ddmmyyyy::deserialize"
    )]
    saida: Option<NaiveDate>,
}

impl<'de> Deserialize<'de> for Estacionamento {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wire = EstacionamentoWire::deserialize(deserializer)?;
        Ok(if wire.estacionamento {
            Estacionamento::Com {
                entrada: wire.entrada,
                saida: wire.saida,
            }
        } else {
            // Parking dates supplied without parking are dropped.
            Estacionamento::Sem
        })
    }
}

/// Reservation entity (one row per booking)
///
/// Read-only after creation; the only mutation is delete-by-id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reserva {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub nome_hospede: String,
    pub telefone: String,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub cidade: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub endereco: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
    pub numero_quarto: String,
    #[serde(with = "date::as_ddmmyyyy")]
    pub data_checkin: NaiveDate,
    #[serde(with = "date::as_ddmmyyyy")]
    pub data_checkout: NaiveDate,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub cafe_da_manha: bool,
    #[serde(flatten)]
    pub estacionamento: Estacionamento,
    #[serde(rename = "valorReserva")]
    pub valor_reserva: Money,
}

/// Create reservation payload (identity is store-assigned)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservaCreate {
    pub nome_hospede: String,
    pub telefone: String,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub cidade: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub endereco: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
    pub numero_quarto: String,
    #[serde(with = "date::as_ddmmyyyy")]
    pub data_checkin: NaiveDate,
    #[serde(with = "date::as_ddmmyyyy")]
    pub data_checkout: NaiveDate,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub cafe_da_manha: bool,
    #[serde(flatten)]
    pub estacionamento: Estacionamento,
    #[serde(rename = "valorReserva")]
    pub valor_reserva: Money,
}

impl ReservaCreate {
    /// Field-level checks applied before the payload reaches the store.
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.nome_hospede, "nome_hospede", MAX_NAME_LEN)?;
        validate_required_text(&self.telefone, "telefone", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&self.numero_quarto, "numero_quarto", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.cpf, "cpf", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.email, "email", MAX_EMAIL_LEN)?;
        validate_optional_text(&self.cep, "cep", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.cidade, "cidade", MAX_NAME_LEN)?;
        validate_optional_text(&self.bairro, "bairro", MAX_NAME_LEN)?;
        validate_optional_text(&self.endereco, "endereco", MAX_ADDRESS_LEN)?;
        validate_optional_text(&self.uf, "uf", MAX_SHORT_TEXT_LEN)?;

        if self.data_checkin > self.data_checkout {
            return Err(AppError::validation(
                "data_checkin must not be after data_checkout",
            ));
        }
        if let Estacionamento::Com {
            entrada: Some(entrada),
            saida: Some(saida),
        } = &self.estacionamento
            && entrada > saida
        {
            return Err(AppError::validation("entradaCar must not be after saidaCar"));
        }
        Ok(())
    }
}

impl From<ReservaCreate> for Reserva {
    fn from(data: ReservaCreate) -> Self {
        Reserva {
            id: None,
            nome_hospede: data.nome_hospede,
            telefone: data.telefone,
            cpf: data.cpf,
            email: data.email,
            cep: data.cep,
            cidade: data.cidade,
            bairro: data.bairro,
            endereco: data.endereco,
            uf: data.uf,
            numero_quarto: data.numero_quarto,
            data_checkin: data.data_checkin,
            data_checkout: data.data_checkout,
            cafe_da_manha: data.cafe_da_manha,
            estacionamento: data.estacionamento,
            valor_reserva: data.valor_reserva,
        }
    }
}
