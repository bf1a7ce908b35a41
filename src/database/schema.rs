//! Definición del esquema de la base de datos
//!
//! SQL embebido e idempotente; se aplica al arranque. Los borrados en
//! cascada NO se delegan a la base: las FKs son planas y el contrato de
//! borrado de cuentas se ejecuta paso a paso en una transacción.

/// SQL para crear los tipos, tablas e índices del sistema
pub const SCHEMA: &str = r#"
-- Tipos enumerados
DO $$ BEGIN
    CREATE TYPE user_role AS ENUM ('rider', 'driver');
EXCEPTION
    WHEN duplicate_object THEN NULL;
END $$;

DO $$ BEGIN
    CREATE TYPE trip_status AS ENUM ('requested', 'accepted', 'completed', 'cancelled');
EXCEPTION
    WHEN duplicate_object THEN NULL;
END $$;

-- Usuarios (pasajeros y conductores)
CREATE TABLE IF NOT EXISTS users (
    id UUID PRIMARY KEY,
    username VARCHAR(150) NOT NULL UNIQUE,
    email VARCHAR(255) NOT NULL UNIQUE,
    phone VARCHAR(30),
    role user_role NOT NULL DEFAULT 'rider',
    password_hash VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Perfil de conductor (1:1 con users)
CREATE TABLE IF NOT EXISTS driver_profiles (
    id UUID PRIMARY KEY,
    user_id UUID NOT NULL UNIQUE REFERENCES users(id),
    license_number VARCHAR(50) NOT NULL UNIQUE,
    car_number VARCHAR(20) NOT NULL,
    car_model VARCHAR(100) NOT NULL,
    description TEXT,
    rating NUMERIC(3,2) NOT NULL DEFAULT 5.00,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Vehículos registrados (varios por conductor)
CREATE TABLE IF NOT EXISTS vehicles (
    id UUID PRIMARY KEY,
    driver_id UUID NOT NULL REFERENCES driver_profiles(id),
    car_number VARCHAR(20) NOT NULL UNIQUE,
    car_model VARCHAR(100) NOT NULL,
    seats INTEGER NOT NULL DEFAULT 4 CHECK (seats >= 1),
    year INTEGER CHECK (year IS NULL OR year >= 1900),
    color VARCHAR(30),
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Viajes
CREATE TABLE IF NOT EXISTS trips (
    id UUID PRIMARY KEY,
    rider_id UUID NOT NULL REFERENCES users(id),
    driver_id UUID REFERENCES driver_profiles(id),
    origin VARCHAR(255) NOT NULL,
    destination VARCHAR(255) NOT NULL,
    comment TEXT,
    price NUMERIC(10,2),
    status trip_status NOT NULL DEFAULT 'requested',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    -- Un viaje solicitado no tiene conductor asignado
    CONSTRAINT trips_requested_without_driver
        CHECK (status <> 'requested' OR driver_id IS NULL)
);

-- Índices para las consultas habituales
CREATE INDEX IF NOT EXISTS idx_trips_rider_id ON trips(rider_id);
CREATE INDEX IF NOT EXISTS idx_trips_driver_id ON trips(driver_id);
CREATE INDEX IF NOT EXISTS idx_trips_status ON trips(status);
CREATE INDEX IF NOT EXISTS idx_trips_created_at ON trips(created_at DESC);
CREATE INDEX IF NOT EXISTS idx_vehicles_driver_id ON vehicles(driver_id);
"#;
